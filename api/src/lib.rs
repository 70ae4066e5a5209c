//! HTTP client for the OCEV validation backend.
//!
//! The backend owns validation, scoring and report generation. This crate only
//! knows how to talk to it:
//! - [`ValidationClient`] posts form payloads, fetches detailed results,
//!   downloads reports and checks `/health`.
//! - [`FormPayload`] is the transient multipart bundle the forms build.
//! - [`model`] holds the wire types (`TaskId`, `ScoreSet`, `DetailedResult`, ...).
//!
//! Works on both native targets and `wasm32` (reqwest uses `fetch` there).

mod client;
mod config;
mod error;
pub mod model;
mod payload;

pub use client::ValidationClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL, ENV_BASE_URL};
pub use error::ClientError;
pub use model::{
    DetailedResult, Endpoint, EvidenceType, HealthStatus, ReportFormat, ScoreSet, TaskAccepted,
    TaskId, ValidationResult,
};
pub use payload::{FormPayload, PayloadPart};
