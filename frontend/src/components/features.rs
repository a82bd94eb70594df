use kafka_sonar_shared::{FeatureSection, ShowcaseSelection, FEATURE_SECTIONS};
use yew::prelude::*;

use crate::{config::asset_path, i18n::current::features as t, utils::now_millis};

#[derive(Properties, PartialEq)]
pub struct FeatureShowcaseViewProps {
    pub sections: &'static [FeatureSection],
    pub selection: ShowcaseSelection,
    pub on_select: Callback<usize>,
}

/// Stateless half of the showcase: a selector list plus one media panel per
/// section, of which only the active one holds an image.
#[function_component(FeatureShowcaseView)]
pub fn feature_showcase_view(props: &FeatureShowcaseViewProps) -> Html {
    let FeatureShowcaseViewProps {
        sections,
        selection,
        on_select,
    } = props;

    html! {
        <div class={classes!("flex", "flex-col", "space-y-6", "items-center", "justify-center")}>
            <div
                role="tablist"
                aria-label={t::TABLIST_ARIA}
                class={classes!(
                    "flex",
                    "flex-col",
                    "space-y-4",
                    "md:space-y-0",
                    "md:flex-row",
                    "md:gap-4",
                    "justify-between",
                    "w-full",
                    "max-w-[1400px]",
                    "mx-auto"
                )}
            >
                { for sections.iter().enumerate().map(|(index, section)| {
                    let active = selection.is_active(index);
                    let onclick = {
                        let on_select = on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(index))
                    };
                    html! {
                        <button
                            type="button"
                            role="tab"
                            id={format!("feature-tab-{index}")}
                            aria-selected={active.to_string()}
                            aria-controls={format!("feature-panel-{index}")}
                            onclick={onclick}
                            class={classes!(
                                "feature-tab",
                                "text-left",
                                "border",
                                "border-blue-50",
                                "rounded-md",
                                "p-2.5",
                                "cursor-pointer",
                                "w-full",
                                "md:max-w-[450px]",
                                "transition-all",
                                "duration-300",
                                "hover:bg-blue-50",
                                "hover:scale-[1.01]",
                                "active:scale-[0.98]",
                                if active { "feature-tab--active bg-blue-100" } else { "bg-white" }
                            )}
                        >
                            <h3 class={classes!("m-0", "font-bold")}>{ section.title }</h3>
                            <p class={classes!("m-0", "mt-1.5", "text-gray-500", "hidden", "md:block")}>
                                { section.description }
                            </p>
                        </button>
                    }
                }) }
            </div>

            <div class={classes!("feature-media-stage", "relative", "w-full", "max-w-[1400px]")}>
                { for sections.iter().enumerate().map(|(index, section)| {
                    let active = selection.is_active(index);
                    html! {
                        <div
                            role="tabpanel"
                            id={format!("feature-panel-{index}")}
                            aria-labelledby={format!("feature-tab-{index}")}
                            aria-hidden={(!active).to_string()}
                            class={classes!(
                                "feature-media",
                                "rounded-md",
                                "m-auto",
                                if active { "feature-media--visible" } else { "feature-media--hidden" }
                            )}
                        >
                            {
                                if active {
                                    html! {
                                        <img
                                            class="rounded-md"
                                            src={asset_path(&selection.media_url(section))}
                                            width="1400"
                                            height="1000"
                                            alt={t::MEDIA_ALT}
                                        />
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

#[function_component(FeatureShowcase)]
pub fn feature_showcase() -> Html {
    let selection =
        use_state(|| ShowcaseSelection::for_sections(&FEATURE_SECTIONS, now_millis()));

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |index: usize| {
            selection.set((*selection).with_selected(index, now_millis()));
        })
    };

    html! {
        <FeatureShowcaseView
            sections={&FEATURE_SECTIONS[..]}
            selection={*selection}
            on_select={on_select}
        />
    }
}

#[cfg(test)]
mod tests {
    use yew::ServerRenderer;

    use super::*;

    async fn render_view(selection: ShowcaseSelection) -> String {
        ServerRenderer::<FeatureShowcaseView>::with_props(move || FeatureShowcaseViewProps {
            sections: &FEATURE_SECTIONS[..],
            selection,
            on_select: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn selected_section_is_the_only_active_one() {
        for target in 0..FEATURE_SECTIONS.len() {
            let selection = ShowcaseSelection::for_sections(&FEATURE_SECTIONS, 1_000)
                .with_selected(target, 2_000);
            let html = render_view(selection).await;

            assert_eq!(html.matches("feature-tab--active").count(), 1);
            assert_eq!(html.matches("feature-media--visible").count(), 1);
            assert_eq!(html.matches("<img").count(), 1);
            assert!(html.contains(&format!("{}?t=2000", asset_path(FEATURE_SECTIONS[target].media_ref))));
            for (other, section) in FEATURE_SECTIONS.iter().enumerate() {
                if other != target {
                    assert!(!html.contains(section.media_ref.trim_start_matches('/')));
                }
            }
        }
    }

    #[tokio::test]
    async fn reselecting_renders_a_new_media_url() {
        let first = ShowcaseSelection::for_sections(&FEATURE_SECTIONS, 1_000).with_selected(2, 3_000);
        let second = first.with_selected(2, 3_000);

        let first_html = render_view(first).await;
        let second_html = render_view(second).await;

        assert!(first_html.contains("download.gif?t=3000"));
        assert!(second_html.contains("download.gif?t=3001"));
        assert_ne!(first_html, second_html);
    }

    #[tokio::test]
    async fn lists_every_title_with_its_own_panel() {
        let html = render_view(ShowcaseSelection::for_sections(&FEATURE_SECTIONS, 0)).await;
        for section in FEATURE_SECTIONS.iter() {
            assert!(html.contains(section.title));
        }
        assert_eq!(html.matches(r#"role="tabpanel""#).count(), FEATURE_SECTIONS.len());
    }

    #[tokio::test]
    async fn initial_render_shows_first_section() {
        let html = ServerRenderer::<FeatureShowcase>::new().hydratable(false).render().await;
        assert!(html.contains(FEATURE_SECTIONS[0].media_ref.trim_start_matches('/')));
        assert_eq!(html.matches("feature-tab--active").count(), 1);
    }
}
