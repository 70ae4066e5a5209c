use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::{
    ApiConfig, ClientError, DetailedResult, Endpoint, FormPayload, HealthStatus, ReportFormat,
    TaskAccepted, TaskId,
};

/// Thin typed wrapper over `reqwest::Client`. Cloning is cheap; clones share
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ValidationClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ValidationClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// POST a form payload and return the task the backend created for it.
    pub async fn submit(
        &self,
        endpoint: Endpoint,
        payload: FormPayload,
    ) -> Result<TaskAccepted, ClientError> {
        let url = self.config.url(endpoint.path())?;
        debug!(%url, fields = ?payload.keys().collect::<Vec<_>>(), "submitting form");
        let response = self
            .http
            .post(url)
            .multipart(payload.into_multipart()?)
            .send()
            .await?;
        let accepted: TaskAccepted = read_json(response).await?;
        if accepted.task_id.as_str().is_empty() {
            return Err(ClientError::InvalidPayload("empty task_id".into()));
        }
        info!(task_id = %accepted.task_id, "task accepted");
        Ok(accepted)
    }

    /// GET `/api/results/{task_id}`.
    pub async fn results(&self, task_id: &TaskId) -> Result<DetailedResult, ClientError> {
        let url = self
            .config
            .segments_url(&["api", "results", path_segment(task_id)?])?;
        let response = self.http.get(url).send().await?;
        let detail: DetailedResult = read_json(response).await?;
        detail.checked()
    }

    /// GET `/api/report/{task_id}/{format}` as opaque bytes.
    pub async fn report(
        &self,
        task_id: &TaskId,
        format: ReportFormat,
    ) -> Result<Vec<u8>, ClientError> {
        let url = self.config.segments_url(&[
            "api",
            "report",
            path_segment(task_id)?,
            format.extension(),
        ])?;
        let response = ensure_success(self.http.get(url).send().await?)?;
        let bytes = response.bytes().await?;
        debug!(%task_id, %format, len = bytes.len(), "report fetched");
        Ok(bytes.to_vec())
    }

    /// GET `/health`.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.config.url("/health")?;
        let response = self.http.get(url).send().await?;
        read_json(response).await
    }
}

/// A task id as one URL path segment. Ids that would collapse or climb the
/// path are refused before any request is made.
fn path_segment(task_id: &TaskId) -> Result<&str, ClientError> {
    match task_id.as_str() {
        "" | "." | ".." => Err(ClientError::InvalidPayload(format!(
            "unusable task id {:?}",
            task_id.as_str()
        ))),
        id => Ok(id),
    }
}

fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!(status = status.as_u16(), url = %response.url(), "backend returned an error");
        Err(ClientError::Http {
            status: status.as_u16(),
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = ensure_success(response)?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
