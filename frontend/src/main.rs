//! Kafka Sonar landing page, rendered client-side with Yew.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
mod pages;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <pages::home::HomePage />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
