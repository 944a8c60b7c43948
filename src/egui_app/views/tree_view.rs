use eframe::egui;
use uuid::Uuid;

use crate::egui_app::state::{AppState, LoadState, LoadedTree};
use crate::egui_app::theme::colors;
use crate::shared::{OperationIndex, OperationKind, OperationNode};

/// Indentation per tree level
const INDENT: f32 = 24.0;

/// Calculation tree of the selected thread
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.selected_thread.is_none() {
        ui.centered_and_justified(|ui| {
            ui.colored_label(colors::TEXT_SECONDARY, "Select a thread to see its calculations.");
        });
        return;
    }

    let loaded = match &state.tree {
        LoadState::Idle => return,
        LoadState::Loading => {
            ui.spinner();
            return;
        }
        LoadState::Failed(error) => {
            ui.colored_label(colors::ERROR, format!("Failed to load tree: {}", error));
            if ui.button("Retry").clicked() {
                state.refresh_tree();
            }
            return;
        }
        LoadState::Loaded(loaded) => loaded.clone(),
    };

    render_header(ui, state, &loaded);
    ui.separator();

    egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
        let thread = &loaded.tree.thread;
        render_operation_form(ui, state, None, thread.value);
        ui.add_space(6.0);
        render_children(ui, state, &loaded.index, None, thread.value, 0);
    });
}

fn render_header(ui: &mut egui::Ui, state: &mut AppState, loaded: &LoadedTree) {
    let thread = &loaded.tree.thread;
    let depth = loaded
        .index
        .walk()
        .iter()
        .map(|entry| entry.depth)
        .max()
        .unwrap_or(0);

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(thread.value.to_string())
                .size(28.0)
                .strong()
                .color(colors::SEED),
        );
        ui.vertical(|ui| {
            ui.colored_label(
                colors::TEXT_SECONDARY,
                format!(
                    "started by @{} on {}",
                    thread.author.username,
                    thread.created_at.format("%Y-%m-%d %H:%M")
                ),
            );
            ui.colored_label(
                colors::TEXT_SECONDARY,
                format!("{} operations, {} levels deep", loaded.index.len(), depth),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("⟳").on_hover_text("Reload tree").clicked() {
                state.refresh_tree();
            }
        });
    });
}

/// Render the children of `parent`, each followed by its own subtree
fn render_children(
    ui: &mut egui::Ui,
    state: &mut AppState,
    index: &OperationIndex,
    parent: Option<Uuid>,
    base: f64,
    depth: usize,
) {
    for node in index.children(parent) {
        ui.horizontal(|ui| {
            ui.add_space(depth as f32 * INDENT);
            ui.vertical(|ui| {
                render_node(ui, node, base);
                render_operation_form(ui, state, Some(node.id), node.result);
            });
        });
        render_children(ui, state, index, Some(node.id), node.result, depth + 1);
    }
}

fn render_node(ui: &mut egui::Ui, node: &OperationNode, base: f64) {
    egui::Frame::default()
        .fill(colors::NODE_BG)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    format!("{} {} {} =", base, node.operation.symbol(), node.right_operand),
                );
                ui.label(
                    egui::RichText::new(node.result.to_string())
                        .strong()
                        .color(colors::RESULT),
                );
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    format!(
                        "@{} · {}",
                        node.author.username,
                        node.created_at.format("%Y-%m-%d %H:%M")
                    ),
                );
            });
        });
}

/// Inline form that applies a new operation to `base`
///
/// `parent` is `None` for the thread root.
fn render_operation_form(ui: &mut egui::Ui, state: &mut AppState, parent: Option<Uuid>, base: f64) {
    if !state.auth_state.is_authenticated() {
        ui.colored_label(colors::HINT, "Log in to add an operation.");
        return;
    }

    let mut submit = false;
    {
        let draft = state.drafts.entry(parent).or_default();
        ui.horizontal(|ui| {
            ui.colored_label(colors::TEXT_SECONDARY, base.to_string());

            egui::ComboBox::from_id_salt(("operation_kind", parent))
                .selected_text(draft.operation.symbol())
                .width(48.0)
                .show_ui(ui, |ui| {
                    for kind in OperationKind::ALL {
                        ui.selectable_value(&mut draft.operation, kind, kind.symbol());
                    }
                });

            let input = ui.add(
                egui::TextEdit::singleline(&mut draft.operand)
                    .id_salt(("operand", parent))
                    .hint_text("number")
                    .desired_width(80.0),
            );
            let enter = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let apply = ui.add_enabled(!draft.submitting, egui::Button::new("Apply"));
            submit = (apply.clicked() || enter) && !draft.submitting;

            if draft.submitting {
                ui.spinner();
            }
        });

        if let Some(ref error) = draft.error {
            ui.colored_label(colors::ERROR, error);
        }
    }

    if submit {
        state.submit_operation(parent);
    }
}
