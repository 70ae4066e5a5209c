use dioxus::prelude::*;

use crate::dashboard::use_dashboard;
use crate::t;

/// Modal error dialog. Blocks the page until dismissed.
#[component]
pub fn AlertDialog() -> Element {
    let mut alert = use_dashboard().alert;
    let Some(message) = alert() else {
        return rsx! {};
    };

    rsx! {
        div { class: "alert-overlay",
            div {
                class: "alert-dialog",
                role: "alertdialog",
                aria_modal: "true",
                aria_labelledby: "alert-message",
                p { id: "alert-message", class: "alert-dialog__message", "{message}" }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    autofocus: true,
                    onclick: move |_| alert.set(None),
                    {t!("alert-dismiss")}
                }
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    let loading = use_dashboard().loading;

    rsx! {
        div {
            id: "loading",
            class: "loading",
            hidden: !loading(),
            aria_live: "polite",
            span { class: "loading__spinner", aria_hidden: "true" }
            span { class: "loading__label", {t!("loading-label")} }
        }
    }
}
