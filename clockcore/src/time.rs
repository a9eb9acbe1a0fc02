//! Time values and the model holding the displayed time.
//!
//! `Time` is an immutable wall-clock reading. `TimeModel` owns the one
//! time the trainer is currently showing and knows how to derive rounded
//! and random times from it.

use std::fmt;

use chrono::{Local, NaiveTime, Timelike};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ClockError, Result};

/// A time of day with second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Time {
    hour: u32,
    minute: u32,
    second: u32,
}

impl Time {
    /// Midnight.
    pub const MIDNIGHT: Time = Time { hour: 0, minute: 0, second: 0 };

    /// Hour and minute, seconds zero.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        Self::with_seconds(hour, minute, 0)
    }

    pub fn with_seconds(hour: u32, minute: u32, second: u32) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ClockError::InvalidTime { hour, minute, second });
        }
        Ok(Self { hour, minute, second })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Hour on a 12-hour dial: 0 and 12 both read as 12.
    pub fn hour12(&self) -> u32 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }
}

impl From<NaiveTime> for Time {
    fn from(t: NaiveTime) -> Self {
        // chrono reports leap seconds as second 59 with extra nanos
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second().min(59),
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Where the model gets "now" from.
pub trait TimeSource {
    fn now(&self) -> Time;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Time {
        Local::now().time().into()
    }
}

/// Floor `time`'s minute to a multiple of `precision`.
///
/// The hour is kept and seconds are dropped.
pub fn round_down(time: Time, precision: u32) -> Result<Time> {
    if precision == 0 {
        return Err(ClockError::InvalidPrecision(precision));
    }
    let minute = time.minute / precision * precision;
    Ok(Time { minute, second: 0, ..time })
}

/// Holds the time currently shown on the clock face.
#[derive(Debug, Clone)]
pub struct TimeModel {
    time: Time,
}

impl Default for TimeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeModel {
    /// Starts at the current local time.
    pub fn new() -> Self {
        Self::from_source(&SystemTimeSource)
    }

    pub fn from_source(source: &impl TimeSource) -> Self {
        Self::with_time(source.now())
    }

    pub fn with_time(time: Time) -> Self {
        Self { time }
    }

    pub fn current_time(&self) -> Time {
        self.time
    }

    pub fn set_time(&mut self, time: Time) {
        self.time = time;
    }

    /// The stored time with its minute floored to `precision`.
    pub fn rounded_time(&self, precision: u32) -> Result<Time> {
        round_down(self.time, precision)
    }

    /// A random time on a 12-hour dial, floored to `precision`.
    ///
    /// Does not touch the stored time.
    pub fn random_time(&self, precision: u32) -> Result<Time> {
        self.random_time_with(precision, &mut rand::thread_rng())
    }

    pub fn random_time_with<R: Rng + ?Sized>(&self, precision: u32, rng: &mut R) -> Result<Time> {
        if precision == 0 {
            return Err(ClockError::InvalidPrecision(precision));
        }
        let hour = rng.gen_range(1..=12);
        let minute = rng.gen_range(0..=59);
        let time = round_down(Time { hour, minute, second: 0 }, precision)?;
        log::debug!("generated random time {} (precision {})", time, precision);
        Ok(time)
    }
}
