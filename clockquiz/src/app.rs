//! clockQuiz application window

use egui::text::LayoutJob;
use egui::{Align2, CentralPanel, Color32, Context, FontId, Key, Sense, TextFormat, TopBottomPanel, Vec2};

use crate::render::paint_clock;
use crate::session::{Feedback, QuizSession};
use crate::settings_dialog::{DialogOutcome, SettingsDialog};
use crate::theme::{menu_bar, status_bar, SlowColors, SlowTheme};

pub struct ClockQuizApp {
    session: QuizSession,
    settings_dialog: Option<SettingsDialog>,
    show_about: bool,
}

impl ClockQuizApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: QuizSession::load(),
            settings_dialog: None,
            show_about: false,
        }
    }

    fn open_settings(&mut self) {
        if self.settings_dialog.is_none() {
            self.settings_dialog = Some(SettingsDialog::new(self.session.settings()));
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let (new_time, reveal, settings) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(Key::N),
                i.modifiers.command && i.key_pressed(Key::D),
                i.modifiers.command && i.key_pressed(Key::Comma),
            )
        });
        if new_time {
            self.session.new_time();
        }
        if reveal {
            self.session.reveal_digital();
        }
        if settings {
            self.open_settings();
        }
    }

    fn draw_menu(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("clock", |ui| {
                    if ui.button("new time    ⌘N").clicked() {
                        self.session.new_time();
                        ui.close_menu();
                    }
                    if ui.button("show digital    ⌘D").clicked() {
                        self.session.reveal_digital();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("settings...    ⌘,").clicked() {
                        self.open_settings();
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        TopBottomPanel::top("title_bar").show(ctx, |ui| {
            SlowTheme::title_bar_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("clockQuiz");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("settings").clicked() {
                            self.open_settings();
                        }
                    });
                });
            });
        });
    }

    fn status_text(&self) -> &'static str {
        match self.session.last_result() {
            Some(r) if r.is_correct() => "correct!  |  ⌘N new time",
            Some(r) if r.hours_correct => "the hour is right, check the minutes",
            Some(r) if r.minutes_correct => "the minutes are right, check the hour",
            Some(_) => "not quite, try again",
            None => "read the clock, type the time, press enter",
        }
    }

    fn draw_controls(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar(ui, self.status_text());
        });

        TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            self.draw_guess_row(ui);
            ui.add_space(6.0);

            ui.vertical_centered_justified(|ui| {
                if ui.button("show digital").clicked() {
                    self.session.reveal_digital();
                }
            });

            // keep the row height stable so the clock does not jump
            let readout_height = 64.0;
            ui.allocate_ui(Vec2::new(ui.available_width(), readout_height), |ui| {
                ui.vertical_centered(|ui| {
                    if self.session.show_digital {
                        ui.label(readout_job(&self.session));
                    } else {
                        ui.add_space(readout_height);
                    }
                });
            });

            ui.vertical_centered_justified(|ui| {
                if ui.button("new time").clicked() {
                    self.session.new_time();
                }
            });
            ui.add_space(6.0);
        });
    }

    fn draw_guess_row(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;
        ui.horizontal(|ui| {
            let field_width = (ui.available_width() - 120.0).max(80.0) / 2.0;
            let session = &mut self.session;

            let hours = guess_field(ui, &mut session.hours_guess, "HH", session.hours_feedback, field_width);
            if hours.changed() {
                session.hours_feedback = Feedback::Neutral;
            }
            submit |= hours.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            let minutes = guess_field(ui, &mut session.minutes_guess, "MM", session.minutes_feedback, field_width);
            if minutes.changed() {
                session.minutes_feedback = Feedback::Neutral;
            }
            submit |= minutes.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            if ui.add_sized([100.0, 32.0], egui::Button::new("check")).clicked() {
                submit = true;
            }
        });
        if submit {
            self.session.check_guess();
        }
    }

    fn draw_clock(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(SlowColors::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                let available = ui.available_rect_before_wrap();
                ui.allocate_rect(available, Sense::hover());
                paint_clock(ui.painter(), available, self.session.geometry().instructions());
            });
    }

    fn draw_settings(&mut self, ctx: &Context) {
        let Some(dialog) = self.settings_dialog.as_mut() else {
            return;
        };
        match dialog.show(ctx) {
            Some(DialogOutcome::Apply(settings)) => {
                self.session.apply_settings(settings);
                self.settings_dialog = None;
            }
            Some(DialogOutcome::Cancel) => self.settings_dialog = None,
            None => {}
        }
    }

    fn draw_about(&mut self, ctx: &Context) {
        if !self.show_about {
            return;
        }
        egui::Window::new("about clockQuiz")
            .collapsible(false)
            .resizable(false)
            .default_width(280.0)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.heading("clockQuiz");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(8.0);
                    ui.label("learn to read an analog clock");
                    ui.add_space(4.0);
                    ui.label("hours are red, minutes are teal");
                    ui.add_space(12.0);
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                    ui.add_space(4.0);
                });
            });
    }
}

/// Hour/minute entry, tinted by the last check.
fn guess_field(ui: &mut egui::Ui, text: &mut String, hint: &str, feedback: Feedback, width: f32) -> egui::Response {
    ui.scope(|ui| {
        ui.visuals_mut().extreme_bg_color = match feedback {
            Feedback::Neutral => SlowColors::WHITE,
            Feedback::Correct => SlowColors::CORRECT,
            Feedback::Wrong => SlowColors::WRONG,
        };
        ui.add(
            egui::TextEdit::singleline(text)
                .hint_text(hint)
                .char_limit(2)
                .font(FontId::proportional(28.0))
                .desired_width(width),
        )
    })
    .inner
}

/// "HH:MM" with the hour in red and the minutes in teal.
fn readout_job(session: &QuizSession) -> LayoutJob {
    let readout = session.readout();
    let font_id = FontId::proportional(48.0);
    let format = |color: Color32| TextFormat { font_id: font_id.clone(), color, ..Default::default() };

    let mut job = LayoutJob::default();
    job.append(&readout.hour_label, 0.0, format(SlowColors::HOURS));
    job.append(":", 0.0, format(SlowColors::BLACK));
    job.append(&readout.minute_label, 0.0, format(SlowColors::MINUTES));
    job
}

impl eframe::App for ClockQuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        self.draw_menu(ctx);
        self.draw_controls(ctx);
        self.draw_clock(ctx);

        self.draw_settings(ctx);
        self.draw_about(ctx);
    }
}
