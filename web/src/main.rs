use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Overview, Recovery, Sleep, Strain};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Overview {},
    #[route("/sleep")]
    Sleep {},
    #[route("/recovery")]
    Recovery {},
    #[route("/strain")]
    Strain {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_overview(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Overview {},
        "{label}"
    })
}
fn nav_sleep(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Sleep {},
        "{label}"
    })
}
fn nav_recovery(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Recovery {},
        "{label}"
    })
}
fn nav_strain(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Strain {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Register the localized navigation builder for this platform
        register_nav(NavBuilder {
            overview: nav_overview,
            sleep: nav_sleep,
            recovery: nav_recovery,
            strain: nav_strain,
        });
    }

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
