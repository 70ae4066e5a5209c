//! Turns what the user typed or picked into a multipart payload for one of the
//! submit endpoints. No network access happens here.

use api::{Endpoint, EvidenceType, FormPayload};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please select a CSV file")]
    MissingCsvFile,
    #[error("Please select a FHIR JSON file")]
    MissingFhirFile,
    #[error("Number of samples must be a positive integer")]
    InvalidSampleCount,
}

/// A file picked through an `<input type="file">`, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// A file input. Reading the picked file is asynchronous, so the field tracks
/// the read in progress and ignores reads that a newer pick superseded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileField {
    file: Option<SelectedFile>,
    pending: Option<u64>,
    reads: u64,
}

impl FileField {
    pub fn ready(file: SelectedFile) -> Self {
        Self {
            file: Some(file),
            ..Self::default()
        }
    }

    /// Start reading a newly picked file; the previous selection is dropped.
    pub fn begin_read(&mut self) -> u64 {
        self.reads += 1;
        self.pending = Some(self.reads);
        self.file = None;
        self.reads
    }

    /// Store the outcome of read `read`. Returns `false` for a stale read.
    pub fn finish_read(&mut self, read: u64, file: Option<SelectedFile>) -> bool {
        if self.pending != Some(read) {
            return false;
        }
        self.pending = None;
        self.file = file;
        true
    }

    pub fn clear(&mut self) {
        self.pending = None;
        self.file = None;
    }

    pub fn is_reading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }
}

/// Where a payload goes and what it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub endpoint: Endpoint,
    pub payload: FormPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvUpload {
    pub file: FileField,
    pub evidence_type: EvidenceType,
}

impl CsvUpload {
    pub fn collect(&self) -> Result<SubmitRequest, FormError> {
        let file = self.file.file().ok_or(FormError::MissingCsvFile)?;
        let payload = FormPayload::new()
            .file("file", &file.name, "text/csv", file.bytes.clone())
            .text("evidence_type", self.evidence_type.as_str());
        Ok(SubmitRequest {
            endpoint: Endpoint::ValidateCsv,
            payload,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FhirUpload {
    pub file: FileField,
}

impl FhirUpload {
    pub fn collect(&self) -> Result<SubmitRequest, FormError> {
        let file = self.file.file().ok_or(FormError::MissingFhirFile)?;
        let payload =
            FormPayload::new().file("file", &file.name, "application/json", file.bytes.clone());
        Ok(SubmitRequest {
            endpoint: Endpoint::ValidateFhir,
            payload,
        })
    }
}

/// Raw field values of the synthetic-data form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticParams {
    pub n_samples: String,
    pub evidence_type: EvidenceType,
    pub seed: String,
}

impl Default for SyntheticParams {
    fn default() -> Self {
        Self {
            n_samples: "100".to_string(),
            evidence_type: EvidenceType::default(),
            seed: String::new(),
        }
    }
}

impl SyntheticParams {
    /// `seed` is sent verbatim when non-empty and left out entirely otherwise.
    pub fn collect(&self) -> Result<SubmitRequest, FormError> {
        let n_samples = self
            .n_samples
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(FormError::InvalidSampleCount)?;

        let mut payload = FormPayload::new()
            .text("n_samples", n_samples.to_string())
            .text("evidence_type", self.evidence_type.as_str());
        if !self.seed.is_empty() {
            payload = payload.text("seed", self.seed.clone());
        }
        Ok(SubmitRequest {
            endpoint: Endpoint::GenerateSynthetic,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::PayloadPart;

    #[test]
    fn csv_without_file_is_rejected() {
        let err = CsvUpload::default().collect().unwrap_err();
        assert_eq!(err.to_string(), "Please select a CSV file");
    }

    #[test]
    fn fhir_without_file_is_rejected() {
        let err = FhirUpload::default().collect().unwrap_err();
        assert_eq!(err.to_string(), "Please select a FHIR JSON file");
    }

    #[test]
    fn csv_carries_file_and_evidence_type() {
        let form = CsvUpload {
            file: FileField::ready(SelectedFile::new("trial.csv", b"a,b\n1,2\n".to_vec())),
            evidence_type: EvidenceType::ChiSquare,
        };
        let request = form.collect().unwrap();
        assert_eq!(request.endpoint, Endpoint::ValidateCsv);
        assert_eq!(
            request.payload.keys().collect::<Vec<_>>(),
            vec!["file", "evidence_type"]
        );
        assert_eq!(request.payload.text_value("evidence_type"), Some("chi-square"));
        assert!(matches!(
            request.payload.get("file"),
            Some(PayloadPart::File { file_name, .. }) if file_name == "trial.csv"
        ));
    }

    #[test]
    fn fhir_carries_only_the_file() {
        let form = FhirUpload {
            file: FileField::ready(SelectedFile::new("bundle.json", b"{}".to_vec())),
        };
        let request = form.collect().unwrap();
        assert_eq!(request.endpoint, Endpoint::ValidateFhir);
        assert_eq!(request.payload.keys().collect::<Vec<_>>(), vec!["file"]);
    }

    #[test]
    fn empty_seed_is_omitted() {
        let request = SyntheticParams::default().collect().unwrap();
        assert!(!request.payload.contains("seed"));
        assert_eq!(request.payload.text_value("n_samples"), Some("100"));
        assert_eq!(request.payload.text_value("evidence_type"), Some("t-test"));
    }

    #[test]
    fn seed_is_sent_verbatim() {
        let params = SyntheticParams {
            seed: "0042".into(),
            ..SyntheticParams::default()
        };
        let request = params.collect().unwrap();
        assert_eq!(request.payload.text_value("seed"), Some("0042"));
    }

    #[test]
    fn sample_count_must_be_positive() {
        for bad in ["", "0", "-5", "ten"] {
            let params = SyntheticParams {
                n_samples: bad.into(),
                ..SyntheticParams::default()
            };
            assert_eq!(params.collect(), Err(FormError::InvalidSampleCount), "{bad:?}");
        }
    }

    #[test]
    fn file_is_unavailable_while_reading() {
        let mut form = CsvUpload::default();
        let read = form.file.begin_read();
        assert!(form.file.is_reading());
        assert!(form.file.file().is_none());

        assert!(form
            .file
            .finish_read(read, Some(SelectedFile::new("trial.csv", b"a\n".to_vec()))));
        assert!(!form.file.is_reading());
        assert!(form.collect().is_ok());
    }

    #[test]
    fn superseded_read_is_ignored() {
        let mut field = FileField::default();
        let first = field.begin_read();
        let second = field.begin_read();

        assert!(!field.finish_read(first, Some(SelectedFile::new("old.csv", Vec::new()))));
        assert!(field.is_reading());
        assert!(field.finish_read(second, Some(SelectedFile::new("new.csv", Vec::new()))));
        assert_eq!(field.file().map(|f| f.name.as_str()), Some("new.csv"));
    }

    #[test]
    fn picking_a_new_file_drops_the_old_one() {
        let mut field = FileField::ready(SelectedFile::new("old.csv", Vec::new()));
        field.begin_read();
        assert!(field.file().is_none());
        field.clear();
        assert!(!field.is_reading());
    }
}
