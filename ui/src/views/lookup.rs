use api::{TaskId, ValidationClient};
use dioxus::prelude::*;

use crate::dashboard::use_dashboard;
use crate::results::{ReportDownloadPanel, ResultsPanel};
use crate::t;

/// Reload the results of a task id the user already has.
#[component]
pub fn Lookup() -> Element {
    let client = use_context::<ValidationClient>();
    let client = use_signal(move || client);
    let dashboard = use_dashboard();
    let mut task_input = use_signal(String::new);
    let busy = dashboard.is_busy();
    let placeholder = t!("lookup-placeholder");

    rsx! {
        section { class: "page page-lookup",
            h1 { {t!("lookup-title")} }
            p { {t!("lookup-intro")} }

            form {
                class: "upload-form lookup-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let id = task_input.read().trim().to_string();
                    if id.is_empty() {
                        return;
                    }
                    dashboard.lookup(client.peek().clone(), TaskId::new(id));
                },
                label { r#for: "taskId", {t!("lookup-label")} }
                input {
                    id: "taskId",
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{task_input}",
                    oninput: move |evt: FormEvent| task_input.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: busy,
                    {t!("lookup-submit")}
                }
            }

            ResultsPanel {}
            ReportDownloadPanel {}
        }
    }
}

/// `/task/:task_id` deep link: loads the task as soon as the route mounts.
#[component]
pub fn Task(task_id: String) -> Element {
    let client = use_context::<ValidationClient>();
    let dashboard = use_dashboard();

    use_effect(use_reactive!(|task_id| {
        dashboard.lookup(client.clone(), TaskId::new(task_id));
    }));

    rsx! {
        section { class: "page page-lookup",
            h1 { {t!("lookup-title")} }
            ResultsPanel {}
            ReportDownloadPanel {}
        }
    }
}
