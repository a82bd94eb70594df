use kafka_sonar_shared::{content::nav_links_for, content::LOGO_REF, star_label, NavLink, NavTarget};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    config::asset_path,
    hooks::{scroll_to_anchor, use_star_count},
    i18n::current::navbar as t,
    utils::stagger_style,
};

#[derive(Properties, PartialEq)]
pub struct NavbarItemsProps {
    pub star_count: Option<u64>,
    /// Narrow layout: in-page scroll links are left out.
    #[prop_or(false)]
    pub compact: bool,
}

#[function_component(NavbarItems)]
pub fn navbar_items(props: &NavbarItemsProps) -> Html {
    let (scroll_links, external_links): (Vec<&NavLink>, Vec<&NavLink>) =
        nav_links_for(props.compact).partition(|link| link.is_scroll_link());

    let scroll_link_class = classes!(
        "reveal-item",
        "mr-5",
        "cursor-pointer",
        "bg-transparent",
        "border-0",
        "p-0",
        "font-bold",
        "text-gray-800",
        "transition-transform",
        "duration-200",
        "hover:scale-105"
    );

    let icon_link_class = classes!(
        "reveal-item",
        "flex",
        "items-center",
        "whitespace-nowrap",
        "text-gray-800",
        "transition-transform",
        "duration-200",
        "hover:scale-110",
        "hover:-translate-y-0.5",
        "active:scale-90"
    );

    html! {
        <>
            { for scroll_links.iter().enumerate().filter_map(|(index, link)| {
                let NavTarget::ScrollAnchor(anchor) = link.target else {
                    return None;
                };
                let onclick = Callback::from(move |_: MouseEvent| scroll_to_anchor(anchor));
                Some(html! {
                    <button
                        type="button"
                        class={scroll_link_class.clone()}
                        style={stagger_style(index)}
                        data-scroll-target={anchor}
                        onclick={onclick}
                    >
                        { link.label }
                    </button>
                })
            }) }

            <div class={classes!("flex", "space-x-5", "sm:mt-0")}>
                { for external_links.iter().enumerate().filter_map(|(offset, link)| {
                    let NavTarget::External { href, icon, shows_star_count } = link.target else {
                        return None;
                    };
                    let count = props.star_count.filter(|_| shows_star_count);
                    Some(html! {
                        <a
                            href={href}
                            target="_blank"
                            rel="noopener noreferrer"
                            title={link.label}
                            aria-label={link.label}
                            class={icon_link_class.clone()}
                            style={stagger_style(scroll_links.len() + offset)}
                        >
                            <Icon name={IconName::from(icon)} size={24} />
                            {
                                if let Some(count) = count {
                                    html! { <span class="ml-1 star-count">{ star_label(count) }</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </a>
                    })
                }) }
            </div>
        </>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let star_count = use_star_count();

    html! {
        <header class={classes!(
            "reveal-group",
            "top-0",
            "left-0",
            "w-full",
            "z-50",
            "flex",
            "flex-row",
            "justify-between",
            "items-center",
            "pt-4",
            "pb-12",
            "bg-blueGray-50",
            "text-gray-800",
            "font-bold"
        )}>
            <img
                src={asset_path(LOGO_REF)}
                alt={t::LOGO_ALT}
                width="150"
                height="30"
                class="logo"
            />

            // Desktop
            <nav class={classes!("hidden", "sm:flex", "items-center")} aria-label={t::NAV_MAIN_ARIA}>
                <NavbarItems star_count={star_count} />
            </nav>

            // Mobile
            <nav class={classes!("flex", "space-x-2", "sm:hidden")} aria-label={t::NAV_COMPACT_ARIA}>
                <NavbarItems star_count={star_count} compact={true} />
            </nav>
        </header>
    }
}
