//! Simulated backup timer
//!
//! A backup run is a fixed ten-step animation. The clock is a plain state
//! machine: callers either invoke [`SimulatedClock::tick`] directly or feed it
//! wall-clock deltas through [`SimulatedClock::advance`], which fires one tick
//! per elapsed period. Nothing here reads the real clock for scheduling, so
//! tests can drive a run to completion without sleeping.

use chrono::Local;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DriveError, Result};
use crate::state::BackupState;

/// Progress gained per tick.
pub const PROGRESS_STEP: u8 = 10;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(300);

pub const BACKUP_COMPLETED: &str = "Backup completed successfully!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClockPhase {
    #[default]
    Idle,
    Running(u8),
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Clock was not running.
    Ignored,
    Advanced(u8),
    Completed,
}

#[derive(Debug, Clone)]
pub struct SimulatedClock {
    phase: ClockPhase,
    interval: Duration,
    carried: Duration,
}

impl SimulatedClock {
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(DriveError::InvalidTickInterval(interval));
        }
        Ok(Self {
            phase: ClockPhase::Idle,
            interval,
            carried: Duration::ZERO,
        })
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, ClockPhase::Running(_))
    }

    /// Begins a run at 0%. Returns `false` without touching anything when a
    /// run is already active.
    pub fn start(&mut self, backup: &mut BackupState) -> bool {
        if self.is_running() {
            return false;
        }
        self.phase = ClockPhase::Running(0);
        self.carried = Duration::ZERO;
        backup.set_progress(0);
        true
    }

    pub fn tick(&mut self, backup: &mut BackupState) -> TickOutcome {
        let ClockPhase::Running(progress) = self.phase else {
            return TickOutcome::Ignored;
        };

        let next = progress.saturating_add(PROGRESS_STEP);
        if next >= 100 {
            self.phase = ClockPhase::Completed;
            self.carried = Duration::ZERO;
            backup.set_progress(100);
            backup.mark_completed(Local::now());
            backup.push_log(BACKUP_COMPLETED);
            info!("Backup run completed");
            TickOutcome::Completed
        } else {
            self.phase = ClockPhase::Running(next);
            backup.set_progress(next);
            debug!(progress = next, "Backup tick");
            TickOutcome::Advanced(next)
        }
    }

    /// Accounts for `elapsed` wall time and fires every tick that became due.
    /// Returns the number of ticks fired. Remainders shorter than one period
    /// carry over to the next call.
    pub fn advance(&mut self, elapsed: Duration, backup: &mut BackupState) -> u32 {
        if !self.is_running() {
            self.carried = Duration::ZERO;
            return 0;
        }

        self.carried = self.carried.saturating_add(elapsed);
        let mut fired = 0;
        while self.carried >= self.interval && self.is_running() {
            self.carried -= self.interval;
            self.tick(backup);
            fired += 1;
        }
        fired
    }

    /// Time until the next tick is due, or `None` when idle.
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.is_running()
            .then(|| self.interval.saturating_sub(self.carried))
    }
}

impl Default for SimulatedClock {
    fn default() -> Self {
        Self {
            phase: ClockPhase::Idle,
            interval: DEFAULT_TICK_INTERVAL,
            carried: Duration::ZERO,
        }
    }
}
