//! clockQuiz — learn to read an analog clock on the Slow Computer
//!
//! Shows a clock face at a random time; type the hour and minute you read
//! and press check. The digital readout can be revealed for help.

mod app;
mod render;
mod session;
mod settings_dialog;
mod theme;

use app::ClockQuizApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    clockcore::logging::init_logging(None);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([300.0, 480.0])
            .with_title("clockQuiz"),
        ..Default::default()
    };

    log::info!("starting clockQuiz {}", env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        "clockQuiz",
        options,
        Box::new(|cc| {
            theme::SlowTheme::default().apply(&cc.egui_ctx);
            Box::new(ClockQuizApp::new(cc))
        }),
    )
}
