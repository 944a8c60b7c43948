use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

/// Login / register form shown while logged out
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(
        egui::RichText::new(if state.is_register_mode { "Create Account" } else { "Login" })
            .size(18.0)
            .color(colors::TEXT_LIGHT),
    );
    ui.add_space(8.0);

    if let Some(ref error) = state.auth_state.error {
        ui.label(egui::RichText::new(error).color(colors::ERROR));
        ui.add_space(4.0);
    }

    egui::Grid::new("auth_form").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
        ui.label(egui::RichText::new("Username:").color(colors::TEXT_SECONDARY));
        ui.add(egui::TextEdit::singleline(&mut state.username_input).desired_width(160.0));
        ui.end_row();

        ui.label(egui::RichText::new("Password:").color(colors::TEXT_SECONDARY));
        let password = ui.add(
            egui::TextEdit::singleline(&mut state.password_input)
                .password(true)
                .desired_width(160.0),
        );
        if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            state.submit_auth();
        }
        ui.end_row();
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let submit_label = if state.is_register_mode { "Register" } else { "Login" };
        let submit = egui::Button::new(egui::RichText::new(submit_label).color(colors::TEXT_LIGHT))
            .fill(colors::ACCENT);
        if ui.add_enabled(!state.auth_state.loading, submit).clicked() {
            state.submit_auth();
        }

        let toggle_label = if state.is_register_mode { "Back to Login" } else { "Create Account" };
        if ui.button(toggle_label).clicked() {
            state.toggle_auth_mode();
        }

        if state.auth_state.loading {
            ui.spinner();
        }
    });
}
