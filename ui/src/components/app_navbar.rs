use api::ValidationClient;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::i18n::{self};
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform crates register how to build their route links, so `ui` does not
/// need to know each platform's `Route` enum. Each function receives the
/// localized label and returns a `Link` that contains it.
///
/// ```ignore
/// register_nav(NavBuilder {
///     dashboard: |label| rsx!( Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" } ),
///     lookup: |label| rsx!( Link { class: "navbar__link", to: Route::Lookup {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub dashboard: fn(label: &str) -> Element,
    pub lookup: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // The routed tree remounts on language change; start from the active tag.
    let mut current_lang = use_signal(move || {
        lang_code_ctx
            .map(|code| code.peek().clone())
            .unwrap_or_else(|| "en-US".to_string())
    });
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Re-render when the platform-wide language signal changes.
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                debug!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(lang = %val, %err, "language switch failed"),
        }
    };

    let links = NAV_BUILDER.get().map(|b| {
        let dashboard = (b.dashboard)(&t!("nav-dashboard"));
        let lookup = (b.lookup)(&t!("nav-lookup"));
        rsx! {
            nav { class: "navbar__links",
                {dashboard}
                {lookup}
            }
        }
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "OCEV" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(links) = links {
                    {links}
                }

                BackendStatus {}

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}

/// Badge fed by `GET /health`, checked once per mount.
#[component]
fn BackendStatus() -> Element {
    let client = use_context::<ValidationClient>();
    let health = use_resource(move || {
        let client = client.clone();
        async move { client.health().await }
    });

    let (modifier, label) = match &*health.read() {
        None => ("pending", t!("backend-checking")),
        Some(Ok(status)) if status.is_healthy() => ("online", t!("backend-online")),
        Some(Ok(status)) => {
            warn!(status = %status.status, "backend reports degraded health");
            ("degraded", t!("backend-degraded"))
        }
        Some(Err(err)) => {
            warn!(%err, "backend health check failed");
            ("offline", t!("backend-offline"))
        }
    };

    rsx! {
        span { class: "navbar__status navbar__status--{modifier}", role: "status", "{label}" }
    }
}
