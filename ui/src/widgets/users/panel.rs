//! Main panel of the users screen.

use egui::{Color32, Response, Ui};
use egui_extras::TableBuilder;
use roster_business::{Locale, TableAction, UserAction, UsersState};

use super::filters::filter_bar;
use super::modals::{show_delete_user_modal, show_user_form_modal};
use super::table::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use super::table::header::render_table_header;
use super::table::row::render_user_row;

/// Displays the users panel: toolbar, filter bar, table and the open modal.
pub fn users_panel(state: &mut UsersState, locale: Locale, ui: &mut Ui) -> Response {
    let strings = locale.strings();

    let response = ui.vertical(|ui| {
        ui.heading(strings.title);

        // Toolbar row: create button and load indicator
        let open_create = ui
            .horizontal(|ui| {
                let clicked = ui.button(strings.create_user).clicked();
                if state.is_fetching() {
                    ui.spinner();
                    ui.label(strings.loading);
                }
                clicked
            })
            .inner;

        if let Some(error) = &state.error {
            ui.colored_label(Color32::RED, format!("{}: {error}", strings.error));
        }

        ui.add_space(8.0);

        for action in filter_bar(ui, &state.table, locale) {
            state.dispatch(action);
        }

        ui.add_space(8.0);

        // Collect clicks, apply after the table borrow ends
        let mut sort_clicked = None;
        let mut action_to_start: Option<UserAction> = None;
        let rows = state.visible_users();

        let mut builder = TableBuilder::new(ui)
            .id_salt("users_table")
            .striped(true)
            .resizable(false);
        for column in table_columns() {
            builder = builder.column(column);
        }

        builder
            .header(HEADER_HEIGHT, |mut header| {
                sort_clicked = render_table_header(&mut header, &state.table, locale);
            })
            .body(|mut body| {
                for user in &rows {
                    body.row(ROW_HEIGHT, |mut row| {
                        if let Some(action) = render_user_row(&mut row, user, locale) {
                            action_to_start = Some(action);
                        }
                    });
                }
            });

        if rows.is_empty() && !state.is_fetching() {
            ui.weak(strings.no_users);
        }

        if let Some(column) = sort_clicked {
            state.dispatch(TableAction::SetSort(column));
        }

        if let Some(action) = action_to_start {
            state.start_action(action);
        }

        if open_create {
            state.open_create_modal();
        }
    });

    match state.current_action() {
        UserAction::Create | UserAction::Edit(_) => show_user_form_modal(state, locale, ui),
        UserAction::Delete(id) => show_delete_user_modal(state, id, locale, ui),
        UserAction::None => {}
    }

    response.response
}
