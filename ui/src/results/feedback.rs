use api::ValidationResult;
use dioxus::prelude::*;

use crate::core::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Positive,
    Warning,
    Neutral,
}

impl FeedbackTone {
    fn modifier(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Warning => "warning",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackBlock {
    pub tone: FeedbackTone,
    pub title: String,
    pub message: String,
}

/// Conformance feedback for one validation run. Replaces the previous view
/// wholesale every time it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    pub blocks: Vec<FeedbackBlock>,
}

impl FeedbackView {
    pub fn from_validation(result: &ValidationResult) -> Self {
        let verdict = if result.conforms {
            FeedbackBlock {
                tone: FeedbackTone::Positive,
                title: "Validation passed".to_string(),
                message: "Evidence conforms to all STATO/SHACL constraints.".to_string(),
            }
        } else {
            let noun = if result.violations == 1 {
                "violation"
            } else {
                "violations"
            };
            FeedbackBlock {
                tone: FeedbackTone::Warning,
                title: "Validation issues".to_string(),
                message: format!("{} constraint {noun} found.", result.violations),
            }
        };

        let summary = FeedbackBlock {
            tone: FeedbackTone::Neutral,
            title: "Constraint summary".to_string(),
            message: format::format_constraints(
                result.passing_constraints,
                result.total_constraints,
            ),
        };

        Self {
            blocks: vec![verdict, summary],
        }
    }

    pub fn has_tone(&self, tone: FeedbackTone) -> bool {
        self.blocks.iter().any(|block| block.tone == tone)
    }
}

#[component]
pub fn FeedbackPanel(feedback: FeedbackView, report: Option<String>) -> Element {
    rsx! {
        div { id: "feedback", class: "feedback",
            for (index, block) in feedback.blocks.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: "feedback__block feedback__block--{block.tone.modifier()}",
                    strong { class: "feedback__title", "{block.title}" }
                    p { class: "feedback__message", "{block.message}" }
                }
            }
            if let Some(report) = report {
                details { class: "feedback__report",
                    summary { {crate::t!("results-shacl-report")} }
                    pre { "{report}" }
                }
            }
        }
    }
}
