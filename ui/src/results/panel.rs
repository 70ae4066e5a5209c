use dioxus::prelude::*;

use crate::dashboard::use_dashboard;
use crate::results::{FeedbackPanel, GaugeCard, GaugeSlot};
use crate::t;

#[component]
pub fn ResultsPanel() -> Element {
    let dashboard = use_dashboard();
    let Some(view) = dashboard.results.read().clone() else {
        return rsx! {};
    };
    let charts = dashboard.charts.read();

    let cards: Vec<Element> = view
        .readouts
        .iter()
        .map(|readout| {
            let chart = charts.get(readout.slot.name()).cloned();
            rsx! {
                GaugeCard {
                    key: "{readout.slot.name()}",
                    readout: readout.clone(),
                    label: slot_label(readout.slot),
                    chart,
                }
            }
        })
        .collect();
    drop(charts);

    let task_label = t!("results-task-label");

    let synthetic = t!("results-synthetic");
    let source = match (&view.evidence_type, view.synthetic) {
        (Some(kind), true) => Some(format!("{kind} · {synthetic}")),
        (Some(kind), false) => Some(kind.clone()),
        (None, true) => Some(synthetic),
        (None, false) => None,
    };

    rsx! {
        section { id: "results", class: "results-card results-panel",
            div { class: "results-card__header",
                h2 { {t!("results-title")} }
                span { class: "results-card__meta", "{task_label} {view.task_id}" }
                if let Some(source) = source {
                    span { class: "results-card__meta", "{source}" }
                }
            }
            div { class: "gauge-grid", {cards.into_iter()} }
            FeedbackPanel { feedback: view.feedback.clone(), report: view.report.clone() }
        }
    }
}

fn slot_label(slot: GaugeSlot) -> String {
    match slot {
        GaugeSlot::Integrity => t!("score-integrity"),
        GaugeSlot::Fairness => t!("score-fairness"),
        GaugeSlot::FhirCompliance => t!("score-fhir-compliance"),
        GaugeSlot::Overall => t!("score-overall"),
    }
}
