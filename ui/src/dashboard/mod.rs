pub mod controller;

use api::{ApiConfig, ReportFormat, TaskId, ValidationClient};
use dioxus::prelude::*;
use tracing::error;

use crate::core::{platform, session::Session};
use crate::forms::{FormError, SubmitRequest};
use crate::results::{redraw_gauges, registry::ChartRegistry, GaugeChart, ResultsView};

use controller::{DashboardHost, DownloadReceipt};

/// State of the report download buttons.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadStatus {
    Idle,
    Working(ReportFormat),
    Done(DownloadReceipt),
    Failed(String),
}

/// Page state shared by the forms, the results panel and the dialogs.
/// All fields are signals, so the struct is `Copy` and lives in context.
#[derive(Clone, Copy, PartialEq)]
pub struct DashboardSignals {
    pub loading: Signal<bool>,
    pub results: Signal<Option<ResultsView>>,
    pub charts: Signal<ChartRegistry<GaugeChart>>,
    pub alert: Signal<Option<String>>,
    pub session: Signal<Session>,
    pub download: Signal<DownloadStatus>,
}

/// Create the dashboard state for the current scope and expose it to children.
pub fn use_dashboard_provider() -> DashboardSignals {
    let loading = use_signal(|| false);
    let results = use_signal(|| Option::<ResultsView>::None);
    let charts = use_signal(ChartRegistry::<GaugeChart>::new);
    let alert = use_signal(|| Option::<String>::None);
    let session = use_signal(Session::default);
    let download = use_signal(|| DownloadStatus::Idle);

    use_context_provider(|| DashboardSignals {
        loading,
        results,
        charts,
        alert,
        session,
        download,
    })
}

/// Backend client plus dashboard state, for the app root. Call it above any
/// subtree that may be remounted (routes, language switches) so the current
/// task and the shown results survive.
pub fn use_dashboard_root() -> DashboardSignals {
    use_context_provider(connect);
    use_dashboard_provider()
}

pub fn use_dashboard() -> DashboardSignals {
    use_context::<DashboardSignals>()
}

/// Build the backend client for this platform. Falls back to the default
/// local backend when the configured URL is unusable.
pub fn connect() -> ValidationClient {
    let config = platform::api_config().unwrap_or_else(|err| {
        error!(%err, "backend URL unusable; using {}", api::DEFAULT_BASE_URL);
        ApiConfig::default()
    });
    ValidationClient::new(config)
}

impl DashboardSignals {
    pub fn is_busy(&self) -> bool {
        self.session.read().is_busy()
    }

    /// Run a form submission. The flow runs on the app root, not on the
    /// calling component, so unmounting the form cannot strand the session
    /// busy or the loading indicator on.
    pub fn submit(self, client: ValidationClient, collected: Result<SubmitRequest, FormError>) {
        let mut host = self;
        run_detached(async move {
            controller::submit_form(&client, &mut host, collected).await;
        });
    }

    pub fn lookup(self, client: ValidationClient, task_id: TaskId) {
        let mut host = self;
        run_detached(async move {
            controller::lookup_flow(&client, &mut host, task_id).await;
        });
    }

    /// Download the current task's report. Ignored while another download runs.
    pub fn download(self, client: ValidationClient, format: ReportFormat) {
        let mut status = self.download;
        if matches!(*status.peek(), DownloadStatus::Working(_)) {
            return;
        }
        status.set(DownloadStatus::Working(format));

        let mut host = self;
        run_detached(async move {
            let next = match controller::download_flow(&client, &mut host, format).await {
                Ok(receipt) => DownloadStatus::Done(receipt),
                Err(err) => DownloadStatus::Failed(err.to_string()),
            };
            status.set(next);
        });
    }
}

fn run_detached(flow: impl std::future::Future<Output = ()> + 'static) {
    if spawn_forever(flow).is_none() {
        error!("dashboard runtime is gone; request dropped");
    }
}

impl DashboardHost for DashboardSignals {
    fn set_loading(&mut self, loading: bool) {
        self.loading.set(loading);
    }

    fn hide_results(&mut self) {
        self.results.set(None);
        if !matches!(*self.download.peek(), DownloadStatus::Working(_)) {
            self.download.set(DownloadStatus::Idle);
        }
    }

    fn show_results(&mut self, view: ResultsView) {
        self.charts
            .with_mut(|registry| redraw_gauges(registry, &view.readouts));
        self.results.set(Some(view));
    }

    fn alert(&mut self, message: String) {
        self.alert.set(Some(message));
    }

    fn with_session<R>(&mut self, f: impl FnOnce(&mut Session) -> R) -> R {
        self.session.with_mut(f)
    }

    fn save_file(
        &mut self,
        filename: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<Option<String>, String> {
        platform::download_bytes(filename, mime, bytes)
    }
}
