//! Settings window: edits a draft of the clock settings

use clockcore::settings::{
    option_label, IntervalOption, HOUR_TEXT_INTERVALS, MINUTE_TEXT_INTERVALS, ROUNDING_PRECISIONS,
};
use clockcore::ClockSettings;
use egui::{Align2, Context, Key, Ui, Vec2};

/// What the user did with the dialog this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogOutcome {
    Apply(ClockSettings),
    Cancel,
}

pub struct SettingsDialog {
    draft: ClockSettings,
}

impl SettingsDialog {
    pub fn new(current: ClockSettings) -> Self {
        Self { draft: current }
    }

    /// Draw the window. Returns `Some` once the user closes it.
    pub fn show(&mut self, ctx: &Context) -> Option<DialogOutcome> {
        let mut outcome = None;

        egui::Window::new("settings")
            .collapsible(false)
            .resizable(false)
            .default_width(320.0)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.group(|ui| {
                    ui.strong("visual");
                    ui.add_space(4.0);
                    ui.checkbox(&mut self.draft.show_minute_marks, "show minute marks");
                    ui.checkbox(&mut self.draft.show_hour_marks, "show hour marks");
                    ui.checkbox(&mut self.draft.show_second_hand, "show second hand");
                    interval_dropdown(
                        ui,
                        "minutes text interval",
                        MINUTE_TEXT_INTERVALS,
                        &mut self.draft.minutes_text_interval,
                    );
                    interval_dropdown(ui, "hours text interval", HOUR_TEXT_INTERVALS, &mut self.draft.hours_text_interval);
                });

                ui.add_space(8.0);

                ui.group(|ui| {
                    ui.strong("behavior");
                    ui.add_space(4.0);
                    interval_dropdown(
                        ui,
                        "round minutes down to",
                        ROUNDING_PRECISIONS,
                        &mut self.draft.round_minutes_to_nearest,
                    );
                });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("cancel").clicked() {
                        outcome = Some(DialogOutcome::Cancel);
                    }
                    if ui.button("set").clicked() {
                        outcome = Some(DialogOutcome::Apply(self.draft));
                    }
                });
            });

        if outcome.is_none() && ctx.input(|i| i.key_pressed(Key::Escape)) {
            outcome = Some(DialogOutcome::Cancel);
        }
        outcome
    }
}

fn interval_dropdown(ui: &mut Ui, label: &str, options: &[IntervalOption], value: &mut u32) {
    ui.horizontal(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_source(label)
            .selected_text(option_label(options, *value))
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(value, option.value, option.label);
                }
            });
    });
}
