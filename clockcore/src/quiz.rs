//! Checking a typed guess against the clock face

use crate::time::Time;

/// Which half of a guess was right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizResult {
    pub hours_correct: bool,
    pub minutes_correct: bool,
}

impl QuizResult {
    pub fn is_correct(&self) -> bool {
        self.hours_correct && self.minutes_correct
    }
}

pub struct QuizChecker;

impl QuizChecker {
    /// Compare the typed hour and minute with `actual`.
    ///
    /// Hours are read off a 12-hour dial, so midnight and noon are both
    /// "12". Empty or non-numeric input counts as wrong; this never fails.
    pub fn check(guess_hours: &str, guess_minutes: &str, actual: Time) -> QuizResult {
        QuizResult {
            hours_correct: matches_number(guess_hours, actual.hour12()),
            minutes_correct: matches_number(guess_minutes, actual.minute()),
        }
    }
}

fn matches_number(input: &str, actual: u32) -> bool {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    // overflowing digit strings cannot match any clock value
    input.parse::<u32>().is_ok_and(|n| n == actual)
}
