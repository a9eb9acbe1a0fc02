//! clockcore — shared logic for the clockQuiz trainer
//!
//! Everything here is independent of the UI toolkit: the clock face is
//! described as a list of draw instructions and the front-end paints them.

pub mod digital;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod quiz;
pub mod settings;
pub mod time;

pub use digital::DigitalReadout;
pub use error::{ClockError, Result};
pub use geometry::{ClockGeometry, DrawInstruction, HandAngles, Point, Viewport};
pub use quiz::{QuizChecker, QuizResult};
pub use settings::ClockSettings;
pub use time::{Time, TimeModel};
