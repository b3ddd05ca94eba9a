use anyhow::{Context, Result};
use tracing::info;

use disaster_drive::ui::{self, GuiOptions};
use disaster_drive::{logging, secure_error, secure_info, AppConfig};

fn main() {
    if let Err(e) = run() {
        secure_error!("{:#}", e);
        eprintln!("Error running Disaster Drive: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AppConfig::load()?;

    // Must stay alive until the window closes
    let _log_guard = logging::init_logging(
        config.logging.directory.as_deref(),
        &config.logging.level,
    )?;

    if let Some(path) = AppConfig::default_path() {
        secure_info!("Configuration path: {}", path.display());
    }

    let options = GuiOptions {
        tick_interval: config.tick_interval(),
        width: config.window.width,
        height: config.window.height,
    };

    ui::run_gui(options).context("Failed to run the Disaster Drive window")?;
    info!("Window closed, exiting");
    Ok(())
}
