mod download;
pub use download::ReportDownloadPanel;

mod feedback;
pub use feedback::{FeedbackBlock, FeedbackPanel, FeedbackTone, FeedbackView};

mod gauge;
pub use gauge::{
    redraw_gauges, GaugeCard, GaugeChart, GaugeSegments, GaugeSlot, ScoreBand, ScoreReadout,
    NEUTRAL_COLOR,
};

mod panel;
pub use panel::ResultsPanel;

pub mod registry;

use api::{DetailedResult, TaskId};

/// Everything the results panel shows for one task, derived from the backend's
/// detailed result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub task_id: TaskId,
    pub readouts: Vec<ScoreReadout>,
    pub feedback: FeedbackView,
    pub report: Option<String>,
    pub evidence_type: Option<String>,
    pub synthetic: bool,
}

impl ResultsView {
    pub fn build(task_id: TaskId, detail: &DetailedResult) -> Self {
        let readouts = GaugeSlot::ALL
            .iter()
            .map(|slot| ScoreReadout::new(*slot, slot.score(&detail.scores)))
            .collect();

        Self {
            task_id,
            readouts,
            feedback: FeedbackView::from_validation(&detail.validation_results),
            report: detail
                .validation_results
                .report
                .clone()
                .filter(|report| !report.trim().is_empty()),
            evidence_type: detail.evidence_type.clone(),
            synthetic: detail.synthetic,
        }
    }

    pub fn readout(&self, slot: GaugeSlot) -> Option<&ScoreReadout> {
        self.readouts.iter().find(|readout| readout.slot == slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ScoreSet, ValidationResult};

    fn detail() -> DetailedResult {
        DetailedResult {
            scores: ScoreSet {
                integrity: 0.9,
                fairness: 0.8,
                fhir_compliance: 0.67,
                overall: 0.8,
            },
            validation_results: ValidationResult {
                conforms: true,
                violations: 0,
                passing_constraints: 10,
                total_constraints: 10,
                report: Some("   ".into()),
            },
            evidence_type: Some("t-test".into()),
            synthetic: false,
        }
    }

    #[test]
    fn builds_one_readout_per_slot_in_order() {
        let view = ResultsView::build(TaskId::new("T1"), &detail());
        let slots: Vec<_> = view.readouts.iter().map(|r| r.slot).collect();
        assert_eq!(slots, GaugeSlot::ALL.to_vec());
        assert_eq!(view.readout(GaugeSlot::Integrity).unwrap().text, "0.90");
        assert_eq!(view.readout(GaugeSlot::FhirCompliance).unwrap().text, "0.67");
    }

    #[test]
    fn blank_report_is_dropped() {
        let view = ResultsView::build(TaskId::new("T1"), &detail());
        assert!(view.report.is_none());
    }
}
