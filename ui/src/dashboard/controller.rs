//! Request → response → render pipeline, independent of how the page draws
//! itself. The Dioxus views drive it through [`super::DashboardSignals`];
//! tests drive it through a recording host.

use api::{ClientError, ReportFormat, TaskId, ValidationClient};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::core::session::{Session, Ticket};
use crate::forms::{FormError, SubmitRequest};
use crate::results::ResultsView;

/// What the pipeline needs from the page.
pub trait DashboardHost {
    fn set_loading(&mut self, loading: bool);
    fn hide_results(&mut self);
    fn show_results(&mut self, view: ResultsView);
    /// Blocking, user-visible error.
    fn alert(&mut self, message: String);
    fn with_session<R>(&mut self, f: impl FnOnce(&mut Session) -> R) -> R;
    /// Persist a downloaded report. `Ok(Some(path))` when it landed on disk.
    fn save_file(
        &mut self,
        filename: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<Option<String>, String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rendered,
    /// A newer submission owns the panel; nothing was drawn.
    Superseded,
    Rejected,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    #[error("No validation results to download")]
    NoResults,
    #[error("Download failed: {0}")]
    Failed(String),
}

/// Where a report went after a successful download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReceipt {
    pub filename: String,
    pub saved_to: Option<String>,
}

/// Entry point for the three forms: alert on input errors without touching the
/// network, otherwise run the submission.
pub async fn submit_form<H: DashboardHost>(
    client: &ValidationClient,
    host: &mut H,
    collected: Result<SubmitRequest, FormError>,
) -> SubmitOutcome {
    match collected {
        Ok(request) => submit_flow(client, host, request).await,
        Err(err) => {
            warn!(%err, "form rejected before submission");
            host.alert(err.to_string());
            SubmitOutcome::Rejected
        }
    }
}

pub async fn submit_flow<H: DashboardHost>(
    client: &ValidationClient,
    host: &mut H,
    request: SubmitRequest,
) -> SubmitOutcome {
    let Some(ticket) = begin(host) else {
        return SubmitOutcome::Rejected;
    };

    host.set_loading(true);
    host.hide_results();

    let fetched = submit_and_fetch(client, host, ticket, request).await;
    let outcome = settle(host, fetched);

    host.set_loading(false);
    host.with_session(|session| session.finish(ticket));
    outcome
}

/// Load results for a task id the user already knows and make it current.
pub async fn lookup_flow<H: DashboardHost>(
    client: &ValidationClient,
    host: &mut H,
    task_id: TaskId,
) -> SubmitOutcome {
    let Some(ticket) = begin(host) else {
        return SubmitOutcome::Rejected;
    };

    host.set_loading(true);
    host.hide_results();

    let fetched = match client.results(&task_id).await {
        Ok(detail) if host.with_session(|session| session.is_latest(ticket)) => {
            host.with_session(|session| session.adopt_task(task_id.clone()));
            Ok(Some(ResultsView::build(task_id, &detail)))
        }
        Ok(_) => Ok(None),
        Err(err) => Err(err),
    };
    let outcome = settle(host, fetched);

    host.set_loading(false);
    host.with_session(|session| session.finish(ticket));
    outcome
}

pub async fn download_flow<H: DashboardHost>(
    client: &ValidationClient,
    host: &mut H,
    format: ReportFormat,
) -> Result<DownloadReceipt, DownloadError> {
    let Some(task_id) = host.with_session(|session| session.current_task().cloned()) else {
        let err = DownloadError::NoResults;
        warn!("download requested before any validation");
        host.alert(err.to_string());
        return Err(err);
    };

    let filename = format.filename(&task_id);
    let saved = match client.report(&task_id, format).await {
        Ok(bytes) => host.save_file(&filename, format.mime(), bytes),
        Err(err) => Err(err.to_string()),
    };

    match saved {
        Ok(saved_to) => {
            info!(%task_id, %format, ?saved_to, "report downloaded");
            Ok(DownloadReceipt { filename, saved_to })
        }
        Err(cause) => {
            let err = DownloadError::Failed(cause);
            error!(%task_id, %format, %err, "report download failed");
            host.alert(err.to_string());
            Err(err)
        }
    }
}

fn begin<H: DashboardHost>(host: &mut H) -> Option<Ticket> {
    match host.with_session(Session::begin) {
        Ok(ticket) => Some(ticket),
        Err(busy) => {
            warn!("submission ignored while another is running");
            host.alert(busy.to_string());
            None
        }
    }
}

async fn submit_and_fetch<H: DashboardHost>(
    client: &ValidationClient,
    host: &mut H,
    ticket: Ticket,
    request: SubmitRequest,
) -> Result<Option<ResultsView>, ClientError> {
    let accepted = client.submit(request.endpoint, request.payload).await?;
    let task_id = accepted.task_id;
    if !host.with_session(|session| session.accept_task(ticket, task_id.clone())) {
        return Ok(None);
    }

    let detail = client.results(&task_id).await?;
    if !host.with_session(|session| session.is_latest(ticket)) {
        return Ok(None);
    }
    Ok(Some(ResultsView::build(task_id, &detail)))
}

fn settle<H: DashboardHost>(
    host: &mut H,
    fetched: Result<Option<ResultsView>, ClientError>,
) -> SubmitOutcome {
    match fetched {
        Ok(Some(view)) => {
            info!(task_id = %view.task_id, "rendering results");
            host.show_results(view);
            SubmitOutcome::Rendered
        }
        Ok(None) => {
            warn!("dropping results of a superseded submission");
            SubmitOutcome::Superseded
        }
        Err(err) => {
            error!(%err, "validation request failed");
            host.alert(err.to_string());
            SubmitOutcome::Failed
        }
    }
}
