//! Per-column filter controls.
//!
//! Each column gets a predicate-kind selector and a text input. Any change
//! to either becomes a `SetFilter` for that column; the reset button becomes
//! `ResetFilters`.

use egui::{ComboBox, TextEdit, Ui};
use roster_business::{Column, FilterKind, FilterSpec, Locale, TableAction, TableState};

const FILTER_WIDTH: f32 = 140.0;

/// Renders the filter bar. Returns the transitions the user triggered this
/// frame, in order.
pub fn filter_bar(ui: &mut Ui, table: &TableState, locale: Locale) -> Vec<TableAction> {
    let mut actions = Vec::new();

    ui.horizontal_wrapped(|ui| {
        for column in Column::ALL {
            if let Some(spec) = column_filter(ui, column, table.filter_for(column), locale) {
                actions.push(TableAction::SetFilter(column, spec));
            }
        }

        if ui.button(locale.strings().reset_filters).clicked() {
            actions.push(TableAction::ResetFilters);
        }
    });

    actions
}

/// Renders the selector and input for one column. Returns the edited spec
/// if either changed.
fn column_filter(ui: &mut Ui, column: Column, mut spec: FilterSpec, locale: Locale) -> Option<FilterSpec> {
    let mut changed = false;

    ui.vertical(|ui| {
        ui.set_width(FILTER_WIDTH);

        ComboBox::from_id_salt(("filter_kind", column.key()))
            .selected_text(spec.kind.label(locale))
            .width(FILTER_WIDTH)
            .show_ui(ui, |ui| {
                for kind in FilterKind::SELECTABLE {
                    changed |= ui
                        .selectable_value(&mut spec.kind, kind, kind.label(locale))
                        .changed();
                }
            });

        let hint = format!(
            "{} {}",
            locale.strings().filter_placeholder,
            column.label(locale)
        );
        changed |= ui
            .add(
                TextEdit::singleline(&mut spec.value)
                    .id_salt(("filter_value", column.key()))
                    .hint_text(hint)
                    .desired_width(FILTER_WIDTH),
            )
            .changed();
    });

    changed.then_some(spec)
}
