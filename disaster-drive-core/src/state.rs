//! Application state groups
//!
//! Everything the window displays lives here. Readers get shared access
//! through getters; only the dispatcher and the clock mutate it.

use chrono::{DateTime, Local};
use std::fmt;
use std::str::FromStr;

use crate::error::DriveError;

pub const DEFAULT_USERNAME: &str = "demoUser";
pub const DEFAULT_EMAIL: &str = "demo@example.com";

/// Progress and log of the simulated backup run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupState {
    log: Vec<String>,
    progress_percent: u8,
    last_completed: Option<DateTime<Local>>,
}

impl BackupState {
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    pub fn last_completed(&self) -> Option<DateTime<Local>> {
        self.last_completed
    }

    pub(crate) fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }

    pub(crate) fn set_progress(&mut self, percent: u8) {
        self.progress_percent = percent.min(100);
    }

    pub(crate) fn mark_completed(&mut self, at: DateTime<Local>) {
        self.last_completed = Some(at);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryState {
    log: Vec<String>,
}

impl RecoveryState {
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub(crate) fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }
}

/// One of the three simulated health gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Cpu,
    Disk,
    Memory,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Cpu, Metric::Disk, Metric::Memory];

    pub fn key(self) -> &'static str {
        match self {
            Metric::Cpu => "CPU",
            Metric::Disk => "Disk",
            Metric::Memory => "Memory",
        }
    }

    /// Caption shown next to the gauge.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Cpu => "CPU Usage",
            Metric::Disk => "Disk Space",
            Metric::Memory => "Memory Usage",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Percentages in `[0, 100]`, overwritten as a whole on every refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthMetrics {
    pub cpu: f64,
    pub disk: f64,
    pub memory: f64,
}

impl HealthMetrics {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cpu => self.cpu,
            Metric::Disk => self.disk,
            Metric::Memory => self.memory,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

impl Default for HealthMetrics {
    fn default() -> Self {
        Self {
            cpu: 45.0,
            disk: 70.0,
            memory: 55.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitoringState {
    log: Vec<String>,
    metrics: HealthMetrics,
}

impl MonitoringState {
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn metrics(&self) -> &HealthMetrics {
        &self.metrics
    }

    pub(crate) fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }

    pub(crate) fn set_metrics(&mut self, metrics: HealthMetrics) {
        self.metrics = metrics;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    #[default]
    User,
    Manager,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::User, Role::Manager];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
            Role::Manager => "Manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DriveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DriveError::UnknownRole(s.to_string()))
    }
}

/// In-memory identity record. Passwords never reach this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl UserProfile {
    pub fn new(username: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            role,
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_EMAIL, Role::User)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    backup: BackupState,
    recovery: RecoveryState,
    monitoring: MonitoringState,
    profile: UserProfile,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backup(&self) -> &BackupState {
        &self.backup
    }

    pub fn recovery(&self) -> &RecoveryState {
        &self.recovery
    }

    pub fn monitoring(&self) -> &MonitoringState {
        &self.monitoring
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub(crate) fn backup_mut(&mut self) -> &mut BackupState {
        &mut self.backup
    }

    pub(crate) fn recovery_mut(&mut self) -> &mut RecoveryState {
        &mut self.recovery
    }

    pub(crate) fn monitoring_mut(&mut self) -> &mut MonitoringState {
        &mut self.monitoring
    }

    pub(crate) fn set_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_fresh_state_defaults() {
        let state = AppState::new();

        assert!(state.backup().log().is_empty());
        assert_eq!(state.backup().progress_percent(), 0);
        assert!(state.backup().last_completed().is_none());
        assert!(state.recovery().log().is_empty());
        assert!(state.monitoring().log().is_empty());
        assert_eq!(
            state.profile(),
            &UserProfile::new("demoUser", "demo@example.com", Role::User)
        );
    }

    #[test]
    fn test_seed_metrics() {
        let metrics = HealthMetrics::default();
        let values: Vec<_> = metrics.iter().collect();
        assert_eq!(
            values,
            vec![(Metric::Cpu, 45.0), (Metric::Disk, 70.0), (Metric::Memory, 55.0)]
        );
    }

    #[test_case("Admin", Role::Admin)]
    #[test_case("User", Role::User)]
    #[test_case("Manager", Role::Manager)]
    fn test_role_parse(input: &str, expected: Role) {
        let role: Role = input.parse().unwrap();
        assert_eq!(role, expected);
        assert_eq!(role.to_string(), input);
    }

    #[test_case("admin")]
    #[test_case("")]
    #[test_case("Root")]
    fn test_role_parse_rejects_unknown(input: &str) {
        assert_eq!(
            input.parse::<Role>(),
            Err(DriveError::UnknownRole(input.to_string()))
        );
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut backup = BackupState::default();
        backup.set_progress(130);
        assert_eq!(backup.progress_percent(), 100);
    }

    #[test]
    fn test_metric_keys() {
        let keys: Vec<_> = Metric::ALL.iter().map(|m| m.key()).collect();
        assert_eq!(keys, vec!["CPU", "Disk", "Memory"]);
    }
}
