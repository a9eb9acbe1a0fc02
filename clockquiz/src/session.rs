//! Quiz state behind the clockQuiz window
//!
//! Everything the buttons and text fields change lives here so it can be
//! exercised without an egui context.

use std::path::PathBuf;

use clockcore::{ClockGeometry, ClockSettings, DigitalReadout, QuizChecker, QuizResult, TimeModel};
use rand::Rng;

/// Field coloring after a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    Neutral,
    Correct,
    Wrong,
}

impl From<bool> for Feedback {
    fn from(correct: bool) -> Self {
        if correct {
            Feedback::Correct
        } else {
            Feedback::Wrong
        }
    }
}

pub struct QuizSession {
    model: TimeModel,
    settings: ClockSettings,
    /// Where settings are saved; `None` keeps them in memory only.
    settings_path: Option<PathBuf>,
    pub hours_guess: String,
    pub minutes_guess: String,
    pub hours_feedback: Feedback,
    pub minutes_feedback: Feedback,
    pub show_digital: bool,
    last_result: Option<QuizResult>,
}

impl QuizSession {
    /// Starts on the current time rounded to the settings' precision.
    pub fn new(model: TimeModel, settings: ClockSettings, settings_path: Option<PathBuf>) -> Self {
        let mut session = Self {
            model,
            settings,
            settings_path,
            hours_guess: String::new(),
            minutes_guess: String::new(),
            hours_feedback: Feedback::Neutral,
            minutes_feedback: Feedback::Neutral,
            show_digital: false,
            last_result: None,
        };
        match session.model.rounded_time(settings.round_minutes_to_nearest) {
            Ok(time) => session.model.set_time(time),
            Err(e) => log::error!("cannot round start time: {}", e),
        }
        session
    }

    /// Load settings from the config dir and start at the wall-clock time.
    pub fn load() -> Self {
        let path = ClockSettings::config_path();
        let settings = ClockSettings::load_or_default(&path);
        Self::new(TimeModel::new(), settings, Some(path))
    }

    pub fn settings(&self) -> ClockSettings {
        self.settings
    }

    pub fn geometry(&self) -> ClockGeometry {
        ClockGeometry::new(self.model.current_time(), self.settings)
    }

    pub fn readout(&self) -> DigitalReadout {
        DigitalReadout::from_time(self.model.current_time())
    }

    pub fn last_result(&self) -> Option<QuizResult> {
        self.last_result
    }

    /// Pick a fresh random time and clear the previous round.
    pub fn new_time(&mut self) {
        self.new_time_with(&mut rand::thread_rng());
    }

    pub fn new_time_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self.model.random_time_with(self.settings.round_minutes_to_nearest, rng) {
            Ok(time) => self.model.set_time(time),
            Err(e) => {
                log::error!("cannot generate a new time: {}", e);
                return;
            }
        }
        self.show_digital = false;
        self.reset_guess();
    }

    pub fn reveal_digital(&mut self) {
        self.show_digital = true;
    }

    pub fn check_guess(&mut self) -> QuizResult {
        let result = QuizChecker::check(&self.hours_guess, &self.minutes_guess, self.model.current_time());
        self.hours_feedback = result.hours_correct.into();
        self.minutes_feedback = result.minutes_correct.into();
        self.last_result = Some(result);
        log::debug!(
            "guess {}:{} -> hours {}, minutes {}",
            self.hours_guess,
            self.minutes_guess,
            result.hours_correct,
            result.minutes_correct
        );
        result
    }

    pub fn reset_guess(&mut self) {
        self.hours_guess.clear();
        self.minutes_guess.clear();
        self.hours_feedback = Feedback::Neutral;
        self.minutes_feedback = Feedback::Neutral;
        self.last_result = None;
    }

    /// Replace the settings and persist them. Invalid settings are refused.
    pub fn apply_settings(&mut self, settings: ClockSettings) {
        if let Err(e) = settings.validate() {
            log::warn!("refusing settings: {}", e);
            return;
        }
        let previous = self.settings.replace(settings);
        if previous != settings {
            log::info!("clock settings changed: {:?}", settings);
        }
        if let Some(path) = &self.settings_path {
            if let Err(e) = settings.save(path) {
                log::error!("failed to save settings to {}: {}", path.display(), e);
            }
        }
    }
}
