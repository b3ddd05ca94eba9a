//! User actions mapped onto state transitions
//!
//! [`EventDispatcher`] owns the [`AppState`], the backup [`SimulatedClock`]
//! and the [`MetricSource`]. Every button, tab switch and picker result in the
//! window ends up as exactly one call here. None of the operations fail.

use chrono::{DateTime, Local};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::clock::{SimulatedClock, TickOutcome};
use crate::error::Result;
use crate::metrics::{MetricSource, RandomMetrics};
use crate::state::{AppState, HealthMetrics, Role, UserProfile};

#[cfg(test)]
mod tests;

pub const BACKUP_STARTED: &str = "Backup started...";

pub const RECOVERY_SCRIPT: [&str; 5] = [
    "Recovery simulation started...",
    "Step 1: Verifying files...",
    "Step 2: Restoring data...",
    "Step 3: Finalizing...",
    "Recovery completed successfully.",
];

pub const PROFILE_SAVED: &str = "Profile saved.";
pub const PROFILE_LOADED: &str = "Profile loaded.";

const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Renders a timestamp the way every log line in the window shows it.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub struct EventDispatcher<M = RandomMetrics> {
    state: AppState,
    clock: SimulatedClock,
    metrics: M,
}

impl EventDispatcher<RandomMetrics> {
    pub fn new() -> Self {
        Self::with_parts(SimulatedClock::default(), RandomMetrics::new())
    }

    pub fn with_interval(interval: Duration) -> Result<Self> {
        Ok(Self::with_parts(
            SimulatedClock::new(interval)?,
            RandomMetrics::new(),
        ))
    }
}

impl Default for EventDispatcher<RandomMetrics> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MetricSource> EventDispatcher<M> {
    pub fn with_parts(clock: SimulatedClock, metrics: M) -> Self {
        Self {
            state: AppState::new(),
            clock,
            metrics,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn clock(&self) -> &SimulatedClock {
        &self.clock
    }

    /// Returns `false` if a run was already in progress; nothing changes then.
    pub fn start_backup(&mut self) -> bool {
        if self.clock.is_running() {
            warn!("Backup already in progress, ignoring start request");
            return false;
        }

        let backup = self.state.backup_mut();
        self.clock.start(backup);
        backup.push_log(BACKUP_STARTED);
        info!(interval_ms = self.clock.interval().as_millis() as u64, "Backup started");
        true
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.clock.tick(self.state.backup_mut())
    }

    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.clock.advance(elapsed, self.state.backup_mut())
    }

    pub fn simulate_recovery(&mut self) {
        let recovery = self.state.recovery_mut();
        for line in RECOVERY_SCRIPT {
            recovery.push_log(line);
        }
        info!("Recovery simulation finished");
    }

    pub fn refresh_monitoring(&mut self) -> HealthMetrics {
        self.refresh_monitoring_at(Local::now())
    }

    pub fn refresh_monitoring_at(&mut self, at: DateTime<Local>) -> HealthMetrics {
        let metrics = HealthMetrics {
            cpu: f64::from(self.metrics.next_reading()),
            disk: f64::from(self.metrics.next_reading()),
            memory: f64::from(self.metrics.next_reading()),
        };

        let monitoring = self.state.monitoring_mut();
        monitoring.set_metrics(metrics);
        monitoring.push_log(format!("Metrics updated at {}", format_timestamp(&at)));
        debug!(
            cpu = metrics.cpu,
            disk = metrics.disk,
            memory = metrics.memory,
            "Health metrics refreshed"
        );
        metrics
    }

    pub fn save_profile(&mut self, username: impl Into<String>, email: impl Into<String>, role: Role) {
        let profile = UserProfile::new(username, email, role);
        info!(username = %profile.username, role = %profile.role, "Profile saved");
        self.state.set_profile(profile);
        self.state.monitoring_mut().push_log(PROFILE_SAVED);
    }

    pub fn load_profile(&mut self) -> UserProfile {
        self.state.monitoring_mut().push_log(PROFILE_LOADED);
        self.state.profile().clone()
    }

    pub fn on_tab_changed(&mut self, tab_name: &str, at: DateTime<Local>) {
        self.state.monitoring_mut().push_log(format!(
            "Switched to tab: {} at {}",
            tab_name,
            format_timestamp(&at)
        ));
        debug!(tab = tab_name, "Tab changed");
    }

    /// Records the picker result. A cancelled picker (`None`) leaves no trace.
    pub fn select_file(&mut self, selection: Option<&Path>) {
        let Some(path) = selection else {
            debug!("File selection cancelled");
            return;
        };

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.state
            .backup_mut()
            .push_log(format!("Selected: {}", name));
    }
}
