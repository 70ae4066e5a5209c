use dioxus::prelude::*;

use crate::forms::{CsvUploadForm, FhirUploadForm, SyntheticForm};
use crate::results::{ReportDownloadPanel, ResultsPanel};
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }
            p { {t!("dashboard-intro")} }

            div { class: "forms-grid",
                CsvUploadForm {}
                FhirUploadForm {}
                SyntheticForm {}
            }

            ResultsPanel {}
            ReportDownloadPanel {}
        }
    }
}
