use kafka_sonar_shared::{content::CONTRIBUTOR_ROLE, ContributorRecord, CONTRIBUTORS};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    config::asset_path,
    i18n::current::team as t,
    utils::stagger_style,
};

#[derive(Properties, PartialEq)]
pub struct ContributorCardProps {
    pub member: ContributorRecord,
    /// Position in the roster, drives the reveal delay.
    pub index: usize,
}

#[function_component(ContributorCard)]
pub fn contributor_card(props: &ContributorCardProps) -> Html {
    let ContributorCardProps {
        member,
        index,
    } = props;

    let profile_link_class = classes!(
        "text-2xl",
        "transition-transform",
        "duration-200",
        "hover:scale-110",
        "active:scale-90"
    );

    html! {
        <div
            role="listitem"
            style={stagger_style(*index)}
            class={classes!(
                "reveal-item",
                "p-4",
                "rounded",
                "flex",
                "flex-col",
                "items-center",
                "gap-2",
                "bg-blue-100",
                "w-full",
                "sm:w-[192px]",
                "h-[240px]",
                "transition-all",
                "duration-300",
                "hover:-translate-y-2.5",
                "hover:shadow-[0_10px_30px_rgba(0,0,0,0.05)]"
            )}
        >
            <img
                class={classes!("rounded-full", "overflow-hidden", "object-cover")}
                src={asset_path(member.image_ref)}
                width="100"
                height="100"
                alt={format!("{}{}", t::IMAGE_ALT_PREFIX, member.name)}
                loading="lazy"
            />
            <div class={classes!("mt-1", "text-l", "font-bold")}>{ member.name }</div>
            <div class="text-base">{ CONTRIBUTOR_ROLE }</div>

            <div class={classes!("mt-1", "flex", "justify-center", "gap-2")}>
                <a
                    href={member.github_url}
                    target="_blank"
                    rel="noopener noreferrer"
                    title={t::GITHUB_TITLE}
                    class={profile_link_class.clone()}
                >
                    <Icon name={IconName::GitHub} />
                </a>
                <a
                    href={member.linkedin_url}
                    target="_blank"
                    rel="noopener noreferrer"
                    title={t::LINKEDIN_TITLE}
                    class={profile_link_class}
                >
                    <Icon name={IconName::LinkedIn} color="#0072b1" />
                </a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContributorRosterProps {
    #[prop_or(&CONTRIBUTORS[..])]
    pub members: &'static [ContributorRecord],
}

#[function_component(ContributorRoster)]
pub fn contributor_roster(props: &ContributorRosterProps) -> Html {
    html! {
        <div
            role="list"
            class={classes!(
                "reveal-group",
                "flex",
                "justify-center",
                "content-center",
                "flex-wrap",
                "gap-4"
            )}
        >
            { for props.members.iter().enumerate().map(|(index, member)| html! {
                <ContributorCard member={*member} index={index} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use yew::ServerRenderer;

    use super::*;

    async fn render_roster(members: &'static [ContributorRecord]) -> String {
        ServerRenderer::<ContributorRoster>::with_props(move || ContributorRosterProps {
            members,
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn renders_one_card_per_member() {
        let html = render_roster(&CONTRIBUTORS[..]).await;
        assert_eq!(html.matches(r#"role="listitem""#).count(), CONTRIBUTORS.len());

        for member in CONTRIBUTORS.iter() {
            assert!(html.contains(member.name));
            assert!(html.contains(&format!(r#"href="{}""#, member.github_url)));
            assert!(html.contains(&format!(r#"href="{}""#, member.linkedin_url)));
            assert!(html.contains(&format!(r#"alt="image of {}""#, member.name)));
        }
        assert_eq!(html.matches(CONTRIBUTOR_ROLE).count(), CONTRIBUTORS.len());
    }

    #[tokio::test]
    async fn renders_arbitrary_tables() {
        static SOLO: [ContributorRecord; 1] = [ContributorRecord {
            name: "Ada Example",
            image_ref: "/ada.png",
            linkedin_url: "https://www.linkedin.com/in/ada-example/",
            github_url: "https://github.com/ada-example",
        }];

        let html = render_roster(&SOLO[..]).await;
        assert_eq!(html.matches(r#"role="listitem""#).count(), 1);
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
        assert!(html.contains(r#"href="https://github.com/ada-example""#));
        assert!(html.contains(r#"href="https://www.linkedin.com/in/ada-example/""#));
    }

    #[tokio::test]
    async fn empty_table_renders_empty_list() {
        static NOBODY: [ContributorRecord; 0] = [];
        let html = render_roster(&NOBODY[..]).await;
        assert!(html.contains(r#"role="list""#));
        assert!(!html.contains(r#"role="listitem""#));
    }
}
