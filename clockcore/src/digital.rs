//! Digital readout shown under the clock face

use std::fmt;

use crate::time::Time;

/// Two-digit hour (12-hour dial) and minute labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalReadout {
    pub hour_label: String,
    pub minute_label: String,
}

impl DigitalReadout {
    pub fn from_time(time: Time) -> Self {
        Self {
            hour_label: format!("{:02}", time.hour12()),
            minute_label: format!("{:02}", time.minute()),
        }
    }
}

impl fmt::Display for DigitalReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hour_label, self.minute_label)
    }
}
