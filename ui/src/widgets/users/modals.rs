//! Modal dialogs for user actions.

use chrono::Utc;
use egui::{Color32, Grid, RichText, Ui, Window};
use log::info;
use roster_business::{Column, Locale, UserAction, UsersState};

/// Shows the create/edit form.
pub fn show_user_form_modal(state: &mut UsersState, locale: Locale, ui: &mut Ui) {
    let strings = locale.strings();
    let title = match state.current_action() {
        UserAction::Edit(_) => strings.edit_user,
        _ => strings.new_user,
    };
    let mut open = true;

    Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if let Some(error) = state.action_error() {
                ui.colored_label(Color32::RED, format!("{}: {error}", strings.error));
                ui.add_space(8.0);
            }

            Grid::new("user_form")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    let form = &mut state.form;
                    for (column, value) in [
                        (Column::Name, &mut form.name),
                        (Column::Email, &mut form.email),
                        (Column::Phone, &mut form.phone),
                        (Column::Company, &mut form.company),
                        (Column::City, &mut form.city),
                    ] {
                        ui.label(column.label(locale));
                        ui.add(
                            egui::TextEdit::singleline(value)
                                .id_salt(("user_form", column.key())),
                        );
                        ui.end_row();
                    }
                });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button(strings.save).clicked()
                    && let Some(id) = state.submit_form(Utc::now())
                {
                    info!("Saved user {id}");
                }

                if ui.button(strings.cancel).clicked() {
                    state.close_action();
                }
            });
        });

    if !open {
        state.close_action();
    }
}

/// Shows the delete confirmation for user `id`.
pub fn show_delete_user_modal(state: &mut UsersState, id: u64, locale: Locale, ui: &mut Ui) {
    let strings = locale.strings();
    let name = state
        .store
        .get(id)
        .map(|u| u.name.clone())
        .unwrap_or_default();
    let mut open = true;

    Window::new(strings.delete_user)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if let Some(error) = state.action_error() {
                ui.colored_label(Color32::RED, format!("{}: {error}", strings.error));
                ui.add_space(8.0);
            }

            ui.label(strings.confirm_delete);
            ui.strong(name);

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new(strings.delete).color(Color32::RED))
                    .clicked()
                {
                    state.confirm_delete();
                }

                if ui.button(strings.cancel).clicked() {
                    state.close_action();
                }
            });
        });

    if !open {
        state.close_action();
    }
}
