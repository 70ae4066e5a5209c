use std::f64::consts::PI;
use std::sync::atomic::{AtomicU64, Ordering};

use api::ScoreSet;
use dioxus::prelude::*;
use tracing::debug;

use crate::core::format;
use crate::results::registry::{ChartHandle, ChartRegistry};

/// Colour of the unfilled part of every ring.
pub const NEUTRAL_COLOR: &str = "#e9ecef";

const RADIUS: f64 = 42.0;
const STROKE: f64 = 12.0;

/// The four score categories, each with its own display slot and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaugeSlot {
    Integrity,
    Fairness,
    FhirCompliance,
    Overall,
}

impl GaugeSlot {
    pub const ALL: [GaugeSlot; 4] = [
        Self::Integrity,
        Self::Fairness,
        Self::FhirCompliance,
        Self::Overall,
    ];

    /// Registry key and DOM id stem.
    pub fn name(self) -> &'static str {
        match self {
            Self::Integrity => "integrity",
            Self::Fairness => "fairness",
            Self::FhirCompliance => "fhir_compliance",
            Self::Overall => "overall",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Integrity => "#28a745",
            Self::Fairness => "#17a2b8",
            Self::FhirCompliance => "#fd7e14",
            Self::Overall => "#4c6ef5",
        }
    }

    pub fn score(self, scores: &ScoreSet) -> f64 {
        match self {
            Self::Integrity => scores.integrity,
            Self::Fairness => scores.fairness,
            Self::FhirCompliance => scores.fhir_compliance,
            Self::Overall => scores.overall,
        }
    }
}

/// Quality band shown under each gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn classify(score: f64) -> Self {
        if score >= 0.8 {
            Self::Excellent
        } else if score >= 0.6 {
            Self::Good
        } else if score >= 0.4 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn modifier(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    pub fn caption(self, slot: GaugeSlot) -> &'static str {
        use GaugeSlot::*;
        use ScoreBand::*;
        match (slot, self) {
            (Integrity, Excellent) => "Excellent statistical integrity. All constraints passed.",
            (Integrity, Good) => "Good statistical integrity. Minor issues detected.",
            (Integrity, Fair) => "Fair statistical integrity. Some constraints failed.",
            (Integrity, Poor) => "Poor statistical integrity. Critical issues found.",
            (Fairness, Excellent) => "FAIR principles fully met. Complete metadata.",
            (Fairness, Good) => "Good FAIR compliance. Minor metadata missing.",
            (Fairness, Fair) => "Partial FAIR compliance. License/identifier/version needed.",
            (Fairness, Poor) => "Poor FAIR compliance. Essential metadata missing.",
            (FhirCompliance, Excellent) => "Full FHIR compliance. Valid structure.",
            (FhirCompliance, Good) => "Good FHIR compliance. Minor validation issues.",
            (FhirCompliance, Fair) => "Partial FHIR compliance. Some required fields missing.",
            (FhirCompliance, Poor) => "Poor FHIR compliance. Invalid structure.",
            (Overall, Excellent) => "High-quality evidence. Ready for clinical use.",
            (Overall, Good) => "Moderate-quality evidence. Review recommended.",
            (Overall, Fair) => "Low-quality evidence. Significant issues need addressing.",
            (Overall, Poor) => "Evidence not suitable for clinical use. Major revisions required.",
        }
    }
}

/// Filled and remaining fractions of a ring. Always sums to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeSegments {
    pub filled: f64,
    pub remainder: f64,
}

impl GaugeSegments {
    pub fn for_score(score: f64) -> Self {
        let filled = if score.is_finite() {
            score.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            filled,
            remainder: 1.0 - filled,
        }
    }
}

/// One score as the panel shows it: text, band and ring.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReadout {
    pub slot: GaugeSlot,
    pub value: f64,
    pub text: String,
    pub band: ScoreBand,
}

impl ScoreReadout {
    pub fn new(slot: GaugeSlot, value: f64) -> Self {
        Self {
            slot,
            value,
            text: format::format_score(value),
            band: ScoreBand::classify(value),
        }
    }
}

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// A drawn gauge. The generation keys the rendered SVG, so replacing the handle
/// unmounts the old node instead of patching it.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeChart {
    generation: u64,
    slot: GaugeSlot,
    segments: Option<GaugeSegments>,
}

impl GaugeChart {
    pub fn draw(slot: GaugeSlot, score: f64) -> Self {
        Self {
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
            slot,
            segments: Some(GaugeSegments::for_score(score)),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `None` once disposed.
    pub fn segments(&self) -> Option<GaugeSegments> {
        self.segments
    }
}

impl ChartHandle for GaugeChart {
    fn dispose(&mut self) {
        debug!(slot = self.slot.name(), generation = self.generation, "disposing gauge");
        self.segments = None;
    }
}

/// Redraw every gauge for a fresh set of readouts. Returns how many prior
/// charts were disposed.
pub fn redraw_gauges(registry: &mut ChartRegistry<GaugeChart>, readouts: &[ScoreReadout]) -> usize {
    let mut disposed = 0;
    for readout in readouts {
        let chart = GaugeChart::draw(readout.slot, readout.value);
        if registry.set(readout.slot.name(), chart) {
            disposed += 1;
        }
    }
    disposed
}

#[component]
pub fn GaugeCard(readout: ScoreReadout, label: String, chart: Option<GaugeChart>) -> Element {
    let slot = readout.slot.name();
    let band = readout.band.modifier();
    let caption = readout.band.caption(readout.slot);

    rsx! {
        div { class: "gauge-card gauge-card--{slot}",
            h3 { class: "gauge-card__label", "{label}" }
            div { class: "gauge-card__ring",
                if let Some(chart) = chart {
                    if let Some(segments) = chart.segments() {
                        GaugeRing {
                            key: "{chart.generation()}",
                            id: "{slot}Chart",
                            segments,
                            color: readout.slot.color().to_string(),
                        }
                    }
                }
                span { id: "{slot}Score", class: "gauge-card__value", "{readout.text}" }
            }
            p { class: "gauge-card__band gauge-card__band--{band}", "{caption}" }
        }
    }
}

#[component]
fn GaugeRing(id: String, segments: GaugeSegments, color: String) -> Element {
    let circumference = 2.0 * PI * RADIUS;
    let filled = segments.filled * circumference;
    let remainder = segments.remainder * circumference;
    let offset = -filled;
    let size = 2.0 * RADIUS + STROKE;
    let center = size / 2.0;

    rsx! {
        svg {
            id: "{id}",
            class: "gauge-ring",
            view_box: "0 0 {size} {size}",
            role: "img",
            g { transform: "rotate(-90 {center} {center})",
                circle {
                    class: "gauge-ring__remainder",
                    cx: "{center}",
                    cy: "{center}",
                    r: "{RADIUS}",
                    fill: "none",
                    stroke: NEUTRAL_COLOR,
                    stroke_width: "{STROKE}",
                    stroke_dasharray: "{remainder} {circumference}",
                    stroke_dashoffset: "{offset}",
                }
                circle {
                    class: "gauge-ring__filled",
                    cx: "{center}",
                    cy: "{center}",
                    r: "{RADIUS}",
                    fill: "none",
                    stroke: "{color}",
                    stroke_width: "{STROKE}",
                    stroke_dasharray: "{filled} {circumference}",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_match_score() {
        for score in [0.0, 0.25, 0.8, 0.9, 1.0] {
            let segments = GaugeSegments::for_score(score);
            assert_eq!(segments.filled, score);
            assert_eq!(segments.remainder, 1.0 - score);
        }
    }

    #[test]
    fn segments_never_leave_unit_range() {
        assert_eq!(GaugeSegments::for_score(f64::NAN).filled, 0.0);
        assert_eq!(GaugeSegments::for_score(1.5).remainder, 0.0);
    }

    #[test]
    fn readout_text_has_two_decimals() {
        assert_eq!(ScoreReadout::new(GaugeSlot::Fairness, 0.8).text, "0.80");
    }

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(ScoreBand::classify(0.8), ScoreBand::Excellent);
        assert_eq!(ScoreBand::classify(0.79), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(0.6), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(0.4), ScoreBand::Fair);
        assert_eq!(ScoreBand::classify(0.39), ScoreBand::Poor);
    }

    #[test]
    fn every_slot_has_its_own_colour() {
        let mut colours: Vec<_> = GaugeSlot::ALL.iter().map(|s| s.color()).collect();
        colours.sort();
        colours.dedup();
        assert_eq!(colours.len(), 4);
        assert!(!colours.contains(&NEUTRAL_COLOR));
    }

    #[test]
    fn redraw_replaces_each_slot_once() {
        let mut registry = ChartRegistry::new();
        let readouts: Vec<_> = GaugeSlot::ALL
            .iter()
            .map(|slot| ScoreReadout::new(*slot, 0.5))
            .collect();

        assert_eq!(redraw_gauges(&mut registry, &readouts), 0);
        let before = registry.get("overall").map(GaugeChart::generation);
        assert_eq!(redraw_gauges(&mut registry, &readouts), 4);
        let after = registry.get("overall").map(GaugeChart::generation);

        assert_eq!(registry.len(), 4);
        assert_ne!(before, after);
    }

    #[test]
    fn disposed_chart_draws_nothing() {
        let mut chart = GaugeChart::draw(GaugeSlot::Overall, 0.3);
        chart.dispose();
        assert!(chart.segments().is_none());
    }
}
