//! Error type shared by the clockcore modules

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("rounding precision must be at least one minute, got {0}")]
    InvalidPrecision(u32),
    #[error("invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClockError>;
