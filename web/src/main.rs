use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{DashboardShell, LocalizedRoot};
use ui::views::{Dashboard, Lookup, Task};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Dashboard {},
    #[route("/lookup")]
    Lookup {},
    #[route("/task/:task_id")]
    Task { task_id: String },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_lookup(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Lookup {},
        "{label}"
    })
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            dashboard: nav_dashboard,
            lookup: nav_lookup,
        });
    }

    rsx! {
        document::Title { "OCEV Dashboard" }
        document::Style { "{MAIN_CSS_INLINE}" }

        // The dashboard state lives above the language-keyed subtree, so a
        // language switch keeps the current task and the shown results.
        LocalizedRoot {
            Router::<Route> {}
        }
    }
}

/// Web layout: the shared shell around the web `Route` outlet.
#[component]
fn WebShell() -> Element {
    rsx! {
        DashboardShell {
            Outlet::<Route> {}
        }
    }
}
