use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::config::use_runtime_config;
use crate::i18n::{text, Locale, UiKey};
use crate::page::Portfolio;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let Some(config) = config_resource() else {
        return rsx! {
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            div { class: "page loading",
                span { class: "spinner" }
            }
        };
    };

    use_context_provider(|| config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    rsx! {
        Portfolio {}
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    let locale = Locale::default();
    rsx! {
        document::Title { "404 | {text(locale, UiKey::NotFound)}" }
        div { class: "page not-found",
            div { class: "glass card",
                h1 { class: "hero-title", "404" }
                p { class: "muted", "{text(locale, UiKey::NotFound)}: /{path}" }
                Link { to: Route::Home {}, class: "button-gradient", "{text(locale, UiKey::BackToTop)}" }
            }
        }
    }
}
