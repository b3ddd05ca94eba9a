//! Disaster Drive core
//!
//! State model and update loop behind the Disaster Drive window. Nothing in
//! here touches a real disk, network or sensor: backups advance on a simulated
//! clock, recovery is a fixed script and health metrics come from a pluggable
//! random source.

pub mod clock;
pub mod dispatcher;
pub mod error;
pub mod metrics;
pub mod state;

pub use clock::{ClockPhase, SimulatedClock, TickOutcome, DEFAULT_TICK_INTERVAL, PROGRESS_STEP};
pub use dispatcher::EventDispatcher;
pub use error::{DriveError, Result};
pub use metrics::{FixedMetrics, MetricSource, RandomMetrics};
pub use state::{
    AppState, BackupState, HealthMetrics, Metric, MonitoringState, RecoveryState, Role,
    UserProfile,
};
