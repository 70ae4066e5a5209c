//! Shared UI crate for the OCEV validation dashboard. Views, form handling,
//! results rendering and the submission pipeline live here; the platform
//! crates only pick the router and the stylesheet.

pub mod core;
pub mod dashboard;
pub mod forms;
pub mod i18n;
pub mod results;
pub mod views;

pub mod components {
    // Localized application navbar with the backend health badge
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Error dialog and loading indicator
    pub mod alert;
    pub use alert::{AlertDialog, LoadingIndicator};

    // Frame shared by all routes
    pub mod shell;
    pub use shell::{DashboardShell, LocalizedRoot};
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
