//! Wire types exchanged with the validation backend.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ClientError;

/// Opaque task identifier handed out by the submit endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three submit endpoints, one per dashboard form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ValidateCsv,
    ValidateFhir,
    GenerateSynthetic,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::ValidateCsv => "/api/validate/csv",
            Self::ValidateFhir => "/api/validate/fhir",
            Self::GenerateSynthetic => "/api/generate/synthetic",
        }
    }
}

/// Statistical test families the backend knows how to model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvidenceType {
    #[default]
    TTest,
    ChiSquare,
    LogisticRegression,
    KaplanMeier,
}

impl EvidenceType {
    pub const ALL: [EvidenceType; 4] = [
        Self::TTest,
        Self::ChiSquare,
        Self::LogisticRegression,
        Self::KaplanMeier,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TTest => "t-test",
            Self::ChiSquare => "chi-square",
            Self::LogisticRegression => "logistic-regression",
            Self::KaplanMeier => "kaplan-meier",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// Download formats offered by `/api/report/{task_id}/{format}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Json,
    Ttl,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [Self::Pdf, Self::Json, Self::Ttl];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Json => "json",
            Self::Ttl => "ttl",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Json => "application/json",
            Self::Ttl => "text/turtle",
        }
    }

    /// `validation_report_{task_id}.{format}`. Characters outside
    /// `[A-Za-z0-9_-]` in the id become `_`, so the name never carries a path.
    pub fn filename(self, task_id: &TaskId) -> String {
        let safe_id: String = task_id
            .as_str()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        format!("validation_report_{safe_id}.{}", self.extension())
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Response of every submit endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAccepted {
    pub task_id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub integrity: f64,
    pub fairness: f64,
    pub fhir_compliance: f64,
    pub overall: f64,
}

impl ScoreSet {
    fn check(&self) -> Result<(), ClientError> {
        let named = [
            ("integrity", self.integrity),
            ("fairness", self.fairness),
            ("fhir_compliance", self.fhir_compliance),
            ("overall", self.overall),
        ];
        for (name, value) in named {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ClientError::InvalidPayload(format!(
                    "score {name}={value} outside [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub conforms: bool,
    pub violations: u32,
    pub passing_constraints: u32,
    pub total_constraints: u32,
    /// Raw SHACL report text, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

impl ValidationResult {
    fn check(&self) -> Result<(), ClientError> {
        if self.passing_constraints > self.total_constraints {
            return Err(ClientError::InvalidPayload(format!(
                "{} passing constraints exceed {} total",
                self.passing_constraints, self.total_constraints
            )));
        }
        Ok(())
    }
}

/// Body of `GET /api/results/{task_id}`. Fields the dashboard does not use
/// (FHIR resources, original rows) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedResult {
    pub scores: ScoreSet,
    pub validation_results: ValidationResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_type: Option<String>,
    #[serde(default)]
    pub synthetic: bool,
}

impl DetailedResult {
    /// Enforce score bounds and the passing ≤ total invariant.
    pub fn checked(self) -> Result<Self, ClientError> {
        self.scores.check()?;
        self.validation_results.check()?;
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub components: Vec<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail(passing: u32, total: u32, integrity: f64) -> DetailedResult {
        serde_json::from_value(json!({
            "scores": {"integrity": integrity, "fairness": 1.0, "fhir_compliance": 0.5, "overall": 0.7},
            "validation_results": {
                "conforms": true,
                "violations": 0,
                "passing_constraints": passing,
                "total_constraints": total
            }
        }))
        .unwrap()
    }

    #[test]
    fn ignores_backend_only_fields() {
        let parsed: DetailedResult = serde_json::from_value(json!({
            "scores": {"integrity": 0.9, "fairness": 0.8, "fhir_compliance": 1.0, "overall": 0.9},
            "validation_results": {
                "conforms": false,
                "violations": 3,
                "passing_constraints": 7,
                "total_constraints": 10,
                "report": "Validation Report\nConforms: False",
                "parsed_report": {"violations": []}
            },
            "fhir_resources": [{"resourceType": "Evidence"}],
            "original_data": [],
            "evidence_type": "t-test",
            "synthetic": true
        }))
        .unwrap();
        assert_eq!(parsed.validation_results.violations, 3);
        assert_eq!(parsed.evidence_type.as_deref(), Some("t-test"));
        assert!(parsed.synthetic);
        assert!(parsed.validation_results.report.is_some());
    }

    #[test]
    fn passing_may_equal_total() {
        assert!(detail(10, 10, 0.9).checked().is_ok());
    }

    #[test]
    fn passing_above_total_is_rejected() {
        assert!(matches!(
            detail(11, 10, 0.9).checked(),
            Err(ClientError::InvalidPayload(_))
        ));
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        assert!(detail(1, 1, 1.2).checked().is_err());
        assert!(detail(1, 1, -0.1).checked().is_err());
    }

    #[test]
    fn report_filename_follows_task_and_format() {
        let id = TaskId::new("T1");
        assert_eq!(ReportFormat::Pdf.filename(&id), "validation_report_T1.pdf");
        assert_eq!(ReportFormat::Ttl.filename(&id), "validation_report_T1.ttl");
    }

    #[test]
    fn report_filename_never_escapes_its_directory() {
        let name = ReportFormat::Pdf.filename(&TaskId::new("../../../etc/x"));
        assert_eq!(name, "validation_report__________etc_x.pdf");
        assert!(!name.contains('/') && !name.contains('\\') && !name.contains(".."));

        let name = ReportFormat::Json.filename(&TaskId::new(r"a\b"));
        assert_eq!(name, "validation_report_a_b.json");
    }

    #[test]
    fn evidence_types_use_backend_names() {
        assert_eq!(
            serde_json::to_value(EvidenceType::LogisticRegression).unwrap(),
            json!("logistic-regression")
        );
        assert_eq!(EvidenceType::parse("kaplan-meier"), Some(EvidenceType::KaplanMeier));
        assert_eq!(EvidenceType::parse("anova"), None);
    }
}
