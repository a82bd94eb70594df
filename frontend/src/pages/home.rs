use kafka_sonar_shared::{
    content::{COPYRIGHT_ANCHOR, FEATURES_ANCHOR, LANDING_ANCHOR, TEAM_ANCHOR},
    ActionTone, HERO_ACTIONS,
};
use yew::prelude::*;

use crate::{
    components::{contributors::ContributorRoster, features::FeatureShowcase, navbar::Navbar},
    i18n::current::{features as features_text, footer as footer_text, hero as hero_text, team as team_text},
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let section_class = classes!(
        "flex",
        "flex-col",
        "items-center",
        "justify-center",
        "py-12",
        "md:py-24",
        "bg-blueGray-50",
        "text-gray-800"
    );

    let heading_class = classes!("text-2xl", "md:text-3xl", "font-bold", "mb-12");

    let action_class = |tone: ActionTone| {
        classes!(
            "rise-in",
            "px-6",
            "py-3",
            "text-white",
            "border",
            "rounded-lg",
            "transition-all",
            "duration-300",
            "hover:-translate-y-1",
            match tone {
                ActionTone::Primary => {
                    "bg-orange-500 border-orange-500 hover:bg-orange-600 \
                     hover:shadow-[0px_8px_15px_rgba(0,0,0,0.1)]"
                },
                ActionTone::Secondary => {
                    "bg-blue-500 border-blue-500 hover:bg-blue-600 \
                     hover:shadow-[0px_8px_15px_rgba(0,0,0,0.2)]"
                },
            }
        )
    };

    html! {
        <div class={classes!("container", "mx-auto", "px-4", "bg-blueGray-50")}>
            <div class="max-w-[1400px]">
                <Navbar />
            </div>

            <section
                id={LANDING_ANCHOR}
                class={classes!(
                    "flex",
                    "flex-wrap",
                    "items-center",
                    "justify-center",
                    "py-12",
                    "md:py-24",
                    "bg-blueGray-50",
                    "text-gray-800"
                )}
            >
                <div class={classes!("w-full", "md:w-3/5", "flex", "flex-col", "items-start", "justify-center", "text-left")}>
                    <div class={classes!("slide-in-left", "max-w-500", "m-auto", "text-left", "leading-tight", "my-0")}>
                        <h2 class={classes!("text-4xl", "md:text-5xl", "font-bold", "leading-tight", "mb-2")}>
                            { hero_text::HEADLINE_TOP }
                        </h2>
                        <h2 class={classes!("text-4xl", "md:text-5xl", "font-bold", "leading-tight", "mb-4")}>
                            { hero_text::HEADLINE_BOTTOM }
                        </h2>
                        <h5 class={classes!("text-xl", "md:text-2xl", "text-gray-500")}>
                            { hero_text::TAGLINE }
                        </h5>
                    </div>
                    <div class={classes!(
                        "mt-8",
                        "space-y-4",
                        "md:space-y-0",
                        "md:space-x-4",
                        "self-start",
                        "flex",
                        "flex-col",
                        "md:flex-row"
                    )}>
                        { for HERO_ACTIONS.iter().map(|action| html! {
                            <a href={action.href} target="_blank" rel="noopener noreferrer">
                                <button type="button" class={action_class(action.tone)}>
                                    { action.label }
                                </button>
                            </a>
                        }) }
                    </div>
                </div>
            </section>

            <section id={FEATURES_ANCHOR} class={section_class.clone()}>
                <h2 class={heading_class.clone()}>{ features_text::HEADING }</h2>
                <FeatureShowcase />
            </section>

            <section id={TEAM_ANCHOR} class={section_class}>
                <h2 class={classes!(heading_class, "fade-up")}>{ team_text::HEADING }</h2>
                <div class={classes!("transition-transform", "duration-300", "hover:scale-105")}>
                    <ContributorRoster />
                </div>
            </section>

            <section id={COPYRIGHT_ANCHOR} class={classes!("py-4", "bg-blueGray-50", "text-gray-800")}>
                <div class="text-center">
                    <p class="text-sm">{ footer_text::COPYRIGHT }</p>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use kafka_sonar_shared::{content::EXTENSION_URL, CONTRIBUTORS, FEATURE_SECTIONS};
    use yew::ServerRenderer;

    use super::*;

    #[tokio::test]
    async fn composes_every_section_in_order() {
        let html = ServerRenderer::<HomePage>::new().hydratable(false).render().await;

        let positions: Vec<_> = [LANDING_ANCHOR, FEATURES_ANCHOR, TEAM_ANCHOR, COPYRIGHT_ANCHOR]
            .iter()
            .map(|anchor| html.find(&format!(r#"id="{anchor}""#)))
            .collect();
        assert!(positions.iter().all(Option::is_some), "missing anchor: {positions:?}");
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        assert!(html.find("<header").zip(positions[0]).is_some_and(|(nav, hero)| nav < hero));
    }

    #[tokio::test]
    async fn carries_hero_and_footer_copy() {
        let html = ServerRenderer::<HomePage>::new().hydratable(false).render().await;

        assert!(html.contains(hero_text::HEADLINE_TOP));
        assert!(html.contains(hero_text::HEADLINE_BOTTOM));
        assert!(html.contains(&format!(r#"href="{EXTENSION_URL}""#)));
        for action in HERO_ACTIONS.iter() {
            assert!(html.contains(action.label));
        }
        assert!(html.contains("Kafka Sonar 2023 | MIT License"));
    }

    #[tokio::test]
    async fn embeds_showcase_and_roster() {
        let html = ServerRenderer::<HomePage>::new().hydratable(false).render().await;

        assert_eq!(html.matches(r#"role="tab""#).count(), FEATURE_SECTIONS.len());
        assert_eq!(html.matches(r#"role="listitem""#).count(), CONTRIBUTORS.len());
    }
}
