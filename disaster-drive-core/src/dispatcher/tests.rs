use super::*;
use crate::clock::{ClockPhase, BACKUP_COMPLETED};
use crate::metrics::FixedMetrics;
use chrono::TimeZone;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn dispatcher(readings: impl IntoIterator<Item = u8>) -> EventDispatcher<FixedMetrics> {
    EventDispatcher::with_parts(SimulatedClock::default(), FixedMetrics::new(readings))
}

fn at() -> DateTime<Local> {
    Local.timestamp_opt(1_760_000_000, 0).unwrap()
}

#[test]
fn test_start_backup_resets_and_logs() {
    let mut d = dispatcher([0]);
    assert!(d.start_backup());
    assert_eq!(d.state().backup().log(), [BACKUP_STARTED.to_string()]);
    assert_eq!(d.state().backup().progress_percent(), 0);
    assert_eq!(d.clock().phase(), ClockPhase::Running(0));
}

#[test]
fn test_start_backup_reentry_leaves_state_unchanged() {
    let mut d = dispatcher([0]);
    d.start_backup();
    d.tick();
    d.tick();
    d.tick();
    let before = d.state().clone();

    assert!(!d.start_backup());
    assert_eq!(d.state(), &before);
    assert_eq!(d.clock().phase(), ClockPhase::Running(30));
}

#[test]
fn test_full_backup_run() {
    let mut d = dispatcher([0]);
    d.start_backup();
    for _ in 0..10 {
        d.tick();
    }

    let backup = d.state().backup();
    assert_eq!(backup.progress_percent(), 100);
    assert_eq!(backup.log().last().map(String::as_str), Some(BACKUP_COMPLETED));
    assert_eq!(
        backup.log(),
        [BACKUP_STARTED.to_string(), BACKUP_COMPLETED.to_string()]
    );
}

#[test]
fn test_second_run_after_completion() {
    let mut d = dispatcher([0]);
    d.start_backup();
    d.advance(Duration::from_secs(5));
    assert!(d.start_backup());
    assert_eq!(d.state().backup().progress_percent(), 0);
    assert_eq!(d.state().backup().log().len(), 3);
}

#[test]
fn test_simulate_recovery_appends_script() {
    let mut d = dispatcher([0]);
    d.simulate_recovery();
    d.simulate_recovery();

    let expected: Vec<String> = RECOVERY_SCRIPT
        .iter()
        .chain(RECOVERY_SCRIPT.iter())
        .map(|s| s.to_string())
        .collect();
    assert_eq!(d.state().recovery().log(), expected.as_slice());
}

#[test]
fn test_refresh_monitoring_overwrites_metrics() {
    let mut d = dispatcher([12, 34, 56, 7, 8, 9]);

    let first = d.refresh_monitoring_at(at());
    assert_eq!(first, HealthMetrics { cpu: 12.0, disk: 34.0, memory: 56.0 });

    let second = d.refresh_monitoring_at(at());
    assert_eq!(second, HealthMetrics { cpu: 7.0, disk: 8.0, memory: 9.0 });
    assert_eq!(d.state().monitoring().metrics(), &second);

    let expected = format!("Metrics updated at {}", format_timestamp(&at()));
    assert_eq!(
        d.state().monitoring().log(),
        [expected.clone(), expected]
    );
}

#[test]
fn test_save_then_load_profile() {
    let mut d = dispatcher([0]);
    d.save_profile("alice", "a@x.com", Role::Manager);
    let profile = d.load_profile();

    assert_eq!(profile, UserProfile::new("alice", "a@x.com", Role::Manager));
    assert_eq!(
        d.state().monitoring().log(),
        [PROFILE_SAVED.to_string(), PROFILE_LOADED.to_string()]
    );
}

#[test]
fn test_default_profile() {
    let mut d = dispatcher([0]);
    assert_eq!(
        d.load_profile(),
        UserProfile::new("demoUser", "demo@example.com", Role::User)
    );
}

#[test]
fn test_save_profile_accepts_empty_fields() {
    let mut d = dispatcher([0]);
    d.save_profile("", "", Role::Admin);
    assert_eq!(d.state().profile(), &UserProfile::new("", "", Role::Admin));
}

#[test]
fn test_tab_change_logged() {
    let mut d = dispatcher([0]);
    d.on_tab_changed("📊 System Health", at());
    assert_eq!(
        d.state().monitoring().log(),
        [format!(
            "Switched to tab: 📊 System Health at {}",
            format_timestamp(&at())
        )]
    );
}

#[test]
fn test_select_file_logs_file_name() {
    let mut d = dispatcher([0]);
    let path = PathBuf::from("/home/demo/documents/report.pdf");
    d.select_file(Some(&path));
    assert_eq!(d.state().backup().log(), ["Selected: report.pdf".to_string()]);
}

#[test]
fn test_select_file_cancel_logs_nothing() {
    let mut d = dispatcher([0]);
    d.select_file(None);
    assert!(d.state().backup().log().is_empty());
}

#[test]
fn test_select_root_uses_full_path() {
    let mut d = dispatcher([0]);
    d.select_file(Some(Path::new("/")));
    assert_eq!(d.state().backup().log(), ["Selected: /".to_string()]);
}

#[test]
fn test_timestamp_format() {
    let ts = Local.with_ymd_and_hms(2026, 1, 5, 9, 4, 3).single().unwrap();
    assert_eq!(format_timestamp(&ts), "Mon Jan 05 09:04:03 2026");
}
