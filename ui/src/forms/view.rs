use std::path::Path;

use api::{EvidenceType, ValidationClient};
use dioxus::html::HasFileData;
use dioxus::prelude::*;
use tracing::warn;

use super::collector::{
    CsvUpload, FhirUpload, FileField, FormError, SelectedFile, SubmitRequest, SyntheticParams,
};
use crate::dashboard::use_dashboard;
use crate::t;

#[component]
pub fn CsvUploadForm() -> Element {
    let mut form = use_signal(CsvUpload::default);
    let submit = use_submit();
    let busy = use_dashboard().is_busy();
    let reading = form.read().file.is_reading();

    rsx! {
        form {
            id: "csvForm",
            class: "upload-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                if !form.read().file.is_reading() {
                    submit(form.read().collect());
                }
            },
            h3 { {t!("form-csv-title")} }
            label { r#for: "csvFile", {t!("form-file-label")} }
            input {
                id: "csvFile",
                r#type: "file",
                accept: ".csv,text/csv",
                onchange: move |evt: FormEvent| pick_file(evt, form, |f: &mut CsvUpload| &mut f.file),
            }
            label { r#for: "csvEvidenceType", {t!("form-evidence-type-label")} }
            EvidenceTypeSelect {
                id: "csvEvidenceType",
                value: form.read().evidence_type,
                onselect: move |kind| form.with_mut(|f| f.evidence_type = kind),
            }
            button {
                r#type: "submit",
                class: "button button--primary",
                disabled: busy || reading,
                {t!("form-csv-submit")}
            }
        }
    }
}

#[component]
pub fn FhirUploadForm() -> Element {
    let form = use_signal(FhirUpload::default);
    let submit = use_submit();
    let busy = use_dashboard().is_busy();
    let reading = form.read().file.is_reading();

    rsx! {
        form {
            id: "fhirForm",
            class: "upload-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                if !form.read().file.is_reading() {
                    submit(form.read().collect());
                }
            },
            h3 { {t!("form-fhir-title")} }
            label { r#for: "fhirFile", {t!("form-file-label")} }
            input {
                id: "fhirFile",
                r#type: "file",
                accept: ".json,application/json,application/fhir+json",
                onchange: move |evt: FormEvent| pick_file(evt, form, |f: &mut FhirUpload| &mut f.file),
            }
            button {
                r#type: "submit",
                class: "button button--primary",
                disabled: busy || reading,
                {t!("form-fhir-submit")}
            }
        }
    }
}

#[component]
pub fn SyntheticForm() -> Element {
    let mut form = use_signal(SyntheticParams::default);
    let submit = use_submit();
    let busy = use_dashboard().is_busy();
    let params = form();

    rsx! {
        form {
            id: "syntheticForm",
            class: "upload-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                submit(form.read().collect());
            },
            h3 { {t!("form-synthetic-title")} }
            label { r#for: "nSamples", {t!("form-samples-label")} }
            input {
                id: "nSamples",
                r#type: "number",
                min: "1",
                required: true,
                value: "{params.n_samples}",
                oninput: move |evt: FormEvent| form.with_mut(|f| f.n_samples = evt.value()),
            }
            label { r#for: "syntheticEvidenceType", {t!("form-evidence-type-label")} }
            EvidenceTypeSelect {
                id: "syntheticEvidenceType",
                value: params.evidence_type,
                onselect: move |kind| form.with_mut(|f| f.evidence_type = kind),
            }
            label { r#for: "seed", {t!("form-seed-label")} }
            input {
                id: "seed",
                r#type: "number",
                placeholder: t!("form-seed-placeholder"),
                value: "{params.seed}",
                oninput: move |evt: FormEvent| form.with_mut(|f| f.seed = evt.value()),
            }
            button {
                r#type: "submit",
                class: "button button--primary",
                disabled: busy,
                {t!("form-synthetic-submit")}
            }
        }
    }
}

#[component]
fn EvidenceTypeSelect(id: String, value: EvidenceType, onselect: EventHandler<EvidenceType>) -> Element {
    rsx! {
        select {
            id: "{id}",
            value: "{value.as_str()}",
            onchange: move |evt: FormEvent| {
                match EvidenceType::parse(&evt.value()) {
                    Some(kind) => onselect.call(kind),
                    None => warn!(value = %evt.value(), "unknown evidence type"),
                }
            },
            for kind in EvidenceType::ALL {
                option {
                    key: "{kind.as_str()}",
                    value: "{kind.as_str()}",
                    selected: kind == value,
                    {evidence_label(kind)}
                }
            }
        }
    }
}

fn evidence_label(kind: EvidenceType) -> String {
    match kind {
        EvidenceType::TTest => t!("evidence-t-test"),
        EvidenceType::ChiSquare => t!("evidence-chi-square"),
        EvidenceType::LogisticRegression => t!("evidence-logistic-regression"),
        EvidenceType::KaplanMeier => t!("evidence-kaplan-meier"),
    }
}

/// One submit handler per form: forwards the collected request (or the input
/// error) to the dashboard, which runs it beyond this component's lifetime.
fn use_submit() -> impl Fn(Result<SubmitRequest, FormError>) + Copy {
    let client = use_context::<ValidationClient>();
    let client = use_signal(move || client);
    let dashboard = use_dashboard();

    move |collected| dashboard.submit(client.peek().clone(), collected)
}

/// Read the first picked file into `field` of the form. Clearing the picker
/// clears the selection; a newer pick wins over a read still in progress.
fn pick_file<F: 'static>(evt: FormEvent, mut form: Signal<F>, field: fn(&mut F) -> &mut FileField) {
    let Some(engine) = evt.files() else {
        form.with_mut(|f| field(f).clear());
        return;
    };
    let Some(path) = engine.files().into_iter().next() else {
        form.with_mut(|f| field(f).clear());
        return;
    };
    let read = form.with_mut(|f| field(f).begin_read());

    spawn(async move {
        let name = Path::new(&path)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.clone());
        let file = match engine.read_file(&path).await {
            Some(bytes) => Some(SelectedFile::new(name, bytes)),
            None => {
                warn!(%path, "selected file could not be read");
                None
            }
        };
        if !form.with_mut(|f| field(f).finish_read(read, file)) {
            warn!(%path, "discarding read superseded by a newer pick");
        }
    });
}
