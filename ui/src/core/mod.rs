pub mod format;
pub mod platform;
pub mod session;
