//! Disaster Drive window
//!
//! The view layer: reads the state held by the core dispatcher, draws it, and
//! turns clicks into [`Message`]s that go straight back into the dispatcher.

pub mod app;
pub mod profile;
pub mod status;
pub mod tab;

#[cfg(feature = "gui")]
mod style;
#[cfg(feature = "gui")]
mod view;

pub use app::{DisasterDriveApp, Message};
pub use profile::ProfileForm;
pub use tab::Tab;

pub const WINDOW_TITLE: &str =
    "Disaster Drive: A Comprehensive System for Resilient Data Protection and Recovery";
pub const HEADING: &str = "Disaster Drive - Resilient Data Protection";

#[derive(Debug, Clone)]
pub struct GuiOptions {
    pub tick_interval: std::time::Duration,
    pub width: f32,
    pub height: f32,
}

impl Default for GuiOptions {
    fn default() -> Self {
        Self {
            tick_interval: disaster_drive_core::DEFAULT_TICK_INTERVAL,
            width: 1100.0,
            height: 700.0,
        }
    }
}

/// Opens the window and blocks until it is closed.
#[cfg(feature = "gui")]
pub fn run_gui(options: GuiOptions) -> Result<(), GuiError> {
    let app = DisasterDriveApp::new(options.tick_interval)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([options.width, options.height]),
        centered: true,
        ..Default::default()
    };

    tracing::info!(
        width = options.width,
        height = options.height,
        "Opening Disaster Drive window"
    );

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| {
            style::apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| GuiError::Window(e.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum GuiError {
    #[error("Setup error: {0}")]
    Setup(#[from] disaster_drive_core::DriveError),
    #[error("Window error: {0}")]
    Window(String),
}
