use eframe::egui;

use crate::egui_app::state::{AppState, LoadState};
use crate::egui_app::theme::colors;

pub mod auth_view;
pub mod thread_list_view;
pub mod tree_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("🔢 Number Talk").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    match &state.health {
                        LoadState::Loaded(status) if status == "ok" => {
                            ui.colored_label(colors::STATUS_ONLINE, "🟢 API ok");
                        }
                        LoadState::Loaded(status) => {
                            ui.colored_label(colors::HINT, format!("🟠 API {}", status));
                        }
                        LoadState::Failed(error) => {
                            ui.colored_label(colors::STATUS_OFFLINE, "🔴 API unreachable")
                                .on_hover_text(error.as_str());
                        }
                        LoadState::Loading => {
                            ui.spinner();
                        }
                        LoadState::Idle => {}
                    }
                    if ui.small_button("⟳").on_hover_text("Check API health").clicked() {
                        state.refresh_health();
                    }

                    ui.add_space(16.0);

                    if let Some(username) = state.auth_state.username().map(str::to_owned) {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        ui.colored_label(colors::TEXT_LIGHT, format!("@{}", username));
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::left("thread_panel")
        .frame(
            egui::Frame::default()
                .fill(colors::SIDE_PANEL_BG)
                .inner_margin(egui::Margin::same(12)),
        )
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            if !state.auth_state.is_authenticated() {
                auth_view::render(ui, state);
                ui.separator();
            }
            thread_list_view::render(ui, state);
        });

    egui::CentralPanel::default()
        .frame(
            egui::Frame::default()
                .fill(colors::TREE_PANEL_BG)
                .inner_margin(egui::Margin::same(16)),
        )
        .show(ctx, |ui| tree_view::render(ui, state));
}
