use api::{ReportFormat, ValidationClient};
use dioxus::prelude::*;

use crate::dashboard::{use_dashboard, DownloadStatus};
use crate::t;

/// Report buttons. Shown whether or not results are on screen; asking for a
/// report before any validation yields the "no results" alert.
#[component]
pub fn ReportDownloadPanel() -> Element {
    let client = use_context::<ValidationClient>();
    let client = use_signal(move || client);
    let dashboard = use_dashboard();
    let status = (dashboard.download)();
    let busy = matches!(status, DownloadStatus::Working(_));

    let feedback = match status {
        DownloadStatus::Idle => None,
        DownloadStatus::Working(format) => Some((
            "results-card__meta",
            t!("download-preparing", format = format.extension().to_uppercase()),
        )),
        DownloadStatus::Done(receipt) => Some((
            "results-card__meta results-card__meta--success",
            match receipt.saved_to {
                Some(path) => t!("download-saved", path = path),
                None => t!("download-started", filename = receipt.filename),
            },
        )),
        DownloadStatus::Failed(err) => Some((
            "results-card__meta results-card__meta--error",
            format!("⚠️ {err}"),
        )),
    };

    let download = move |format: ReportFormat| dashboard.download(client.peek().clone(), format);

    rsx! {
        div { class: "results-card results-download",
            h3 { {t!("download-title")} }
            div { class: "results-download__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy,
                    onclick: move |_| download(ReportFormat::Pdf),
                    {t!("download-pdf")}
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy,
                    onclick: move |_| download(ReportFormat::Json),
                    {t!("download-json")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: busy,
                    onclick: move |_| download(ReportFormat::Ttl),
                    {t!("download-ttl")}
                }
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}
