use eframe::egui;

use crate::egui_app::state::{AppState, LoadState};
use crate::egui_app::theme::colors;

/// Thread list with the creation form for logged-in users
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Threads").size(18.0).color(colors::TEXT_LIGHT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("⟳").on_hover_text("Reload threads").clicked() {
                state.refresh_threads();
            }
        });
    });
    ui.add_space(6.0);

    if state.auth_state.is_authenticated() {
        render_new_thread_form(ui, state);
        ui.add_space(6.0);
    }

    let mut clicked = None;
    match &state.threads {
        LoadState::Idle => {}
        LoadState::Loading => {
            ui.spinner();
        }
        LoadState::Failed(error) => {
            ui.colored_label(colors::ERROR, format!("Failed to load threads: {}", error));
        }
        LoadState::Loaded(threads) if threads.is_empty() => {
            ui.colored_label(colors::TEXT_SECONDARY, "No threads yet.");
        }
        LoadState::Loaded(threads) => {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                for thread in threads {
                    let selected = state.selected_thread == Some(thread.id);
                    let text = egui::RichText::new(format!(
                        "{}  · @{}  · {}",
                        thread.value,
                        thread.author.username,
                        thread.created_at.format("%Y-%m-%d %H:%M")
                    ))
                    .color(if selected { colors::SEED } else { colors::TEXT_LIGHT });

                    if ui.selectable_label(selected, text).clicked() {
                        clicked = Some(thread.id);
                    }
                }
            });
        }
    }

    if let Some(thread_id) = clicked {
        state.select_thread(thread_id);
    }
}

fn render_new_thread_form(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Start with").color(colors::TEXT_SECONDARY));
        let input = ui.add(
            egui::TextEdit::singleline(&mut state.new_thread_input)
                .hint_text("number")
                .desired_width(90.0),
        );
        let submit_on_enter = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let creating = state.is_creating_thread();
        let post = ui.add_enabled(!creating, egui::Button::new("Post"));
        if (post.clicked() || submit_on_enter) && !creating {
            state.submit_new_thread();
        }
        if creating {
            ui.spinner();
        }
    });

    if let Some(ref error) = state.new_thread_error {
        ui.colored_label(colors::ERROR, error);
    }
}
