//! Backend location.

use reqwest::Url;

use crate::ClientError;

/// Environment variable consulted by native builds for the backend base URL.
pub const ENV_BASE_URL: &str = "OCEV_API_URL";

/// Where a locally started backend listens by default.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Parse a base URL. Any path on it is kept so the dashboard can sit behind
    /// a prefix (`https://host/ocev/`).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base_url =
            Url::parse(base_url).map_err(|err| ClientError::InvalidUrl(format!("{base_url}: {err}")))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    /// Read [`ENV_BASE_URL`], falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self, ClientError> {
        match std::env::var(ENV_BASE_URL) {
            Ok(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an absolute API path such as `/api/results/T1` against the base.
    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ClientError::InvalidUrl(format!("{path}: {err}")))
    }

    /// Append `segments` to the base path, percent-encoding each one, so a
    /// value holding `/`, `#` or `?` stays a single segment.
    pub fn segments_url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("{} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("valid default base URL"),
        }
    }
}
