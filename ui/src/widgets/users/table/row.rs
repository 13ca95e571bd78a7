//! Row rendering for the users table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use roster_business::{Column, Locale, User, UserAction};

/// Renders a single user row: the five column values and the action
/// buttons.
///
/// Returns the action to start if an action button was clicked.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &User, locale: Locale) -> Option<UserAction> {
    let mut action = None;

    for column in Column::ALL {
        row.col(|ui| {
            render_text_cell(ui, column.value(user));
            draw_cell_bottom_border(ui);
        });
    }

    row.col(|ui| {
        action = render_action_buttons(ui, user.id, locale);
        draw_cell_bottom_border(ui);
    });

    action
}

#[inline]
fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.add(egui::Label::new(text).truncate());
}

/// Renders the edit/delete buttons.
#[inline]
fn render_action_buttons(ui: &mut Ui, id: u64, locale: Locale) -> Option<UserAction> {
    let strings = locale.strings();
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("✏").on_hover_text(strings.edit).clicked() {
            action = Some(UserAction::Edit(id));
        }
        if ui.button("🗑").on_hover_text(strings.delete).clicked() {
            action = Some(UserAction::Delete(id));
        }
    });

    action
}

/// Thin separator under each cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
