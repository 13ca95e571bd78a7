//! Table header rendering for the users table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use roster_business::{Column, Locale, TableState};

/// Text of a sortable header: the column label, plus ▲/▼ on the active
/// sort column.
pub fn header_text(table: &TableState, column: Column, locale: Locale) -> String {
    let label = column.label(locale);
    match table.sort_indicator(column) {
        Some(order) => format!("{label} {}", order.indicator()),
        None => label.to_owned(),
    }
}

/// Renders the header row. Returns the column whose header was clicked.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    table: &TableState,
    locale: Locale,
) -> Option<Column> {
    let mut clicked = None;

    for column in Column::ALL {
        header.col(|ui| {
            if render_sort_button(ui, &header_text(table, column, locale)) {
                clicked = Some(column);
            }
        });
    }

    header.col(|ui| {
        ui.centered_and_justified(|ui| {
            ui.strong(locale.strings().actions);
        });
    });

    clicked
}

/// Renders a bold, frameless header button. Returns `true` if clicked.
#[inline]
fn render_sort_button(ui: &mut Ui, text: &str) -> bool {
    ui.centered_and_justified(|ui| {
        ui.add(Button::new(RichText::new(text).strong()).frame(false))
            .clicked()
    })
    .inner
}
