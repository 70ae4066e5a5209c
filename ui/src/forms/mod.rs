mod collector;
pub use collector::{
    CsvUpload, FhirUpload, FileField, FormError, SelectedFile, SubmitRequest, SyntheticParams,
};

mod view;
pub use view::{CsvUploadForm, FhirUploadForm, SyntheticForm};
