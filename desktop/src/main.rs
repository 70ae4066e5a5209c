#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{DashboardShell, LocalizedRoot};

use ui::views::{Dashboard, Lookup, Task};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Dashboard {},
    #[route("/lookup")]
    Lookup {},
    #[route("/task/:task_id")]
    Task { task_id: String },
}

// Shared theme, embedded so packaged builds need no stylesheet on disk.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("OCEV Dashboard – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(1280.0, 860.0)),
                )
                .with_resource_directory(resolve_resource_dir()),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::initialize_default();
    LaunchBuilder::server().launch(App);
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_lookup(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Lookup {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        lookup: nav_lookup,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // The dashboard state lives above the language-keyed subtree, so a
        // language switch keeps the current task and the shown results.
        LocalizedRoot {
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: the shared shell around the desktop `Route` outlet.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        DashboardShell {
            Outlet::<Route> {}
        }
    }
}
