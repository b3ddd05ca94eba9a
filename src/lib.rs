//! Disaster Drive
//!
//! Launcher-side plumbing for the Disaster Drive window: configuration and
//! logging. The state model lives in `disaster-drive-core`, the window in
//! `disaster-drive-ui`.

pub mod config;
pub mod logging;

pub use config::AppConfig;
pub use disaster_drive_core as model;
pub use disaster_drive_ui as ui;
