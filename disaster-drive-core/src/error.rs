use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DriveError {
    #[error("Unknown role: {0:?} (expected Admin, User or Manager)")]
    UnknownRole(String),
    #[error("Invalid tick interval: {0:?}")]
    InvalidTickInterval(Duration),
}

pub type Result<T> = std::result::Result<T, DriveError>;
