/**
 * egui Native Desktop App - Main Entry Point
 *
 * Implements `eframe::App` for the Number Talk client: drains finished
 * background requests, then renders the top bar and the main panels.
 */
use eframe::egui;
use number_talk::egui_app::{views, AppState};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Number Talk",
        options,
        Box::new(|_cc| Ok(Box::new(NumberTalkApp::default()))),
    )
}

/// Main application state
struct NumberTalkApp {
    state: AppState,
}

impl Default for NumberTalkApp {
    fn default() -> Self {
        let mut state = AppState::new();
        state.start();
        Self { state }
    }
}

impl eframe::App for NumberTalkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
