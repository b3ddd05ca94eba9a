use disaster_drive_core::{BackupState, SimulatedClock};

const LAST_BACKUP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Footer line summarising the backup run.
pub fn status_line(backup: &BackupState, clock: &SimulatedClock) -> String {
    if clock.is_running() {
        return format!(
            "Status: Backup in progress ({}%)",
            backup.progress_percent()
        );
    }

    let last = backup
        .last_completed()
        .map(|at| at.format(LAST_BACKUP_FORMAT).to_string())
        .unwrap_or_else(|| "N/A".to_string());
    format!("Status: System Ready | Last Backup: {}", last)
}
