//! Column definitions for the users table.

use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const PHONE_WIDTH: f32 = 160.0;
pub const ACTIONS_WIDTH: f32 = 90.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Table column configuration for the users table.
///
/// Returns a vector of column definitions in order:
/// - Name, Email (flexible)
/// - Phone (fixed)
/// - Company, City (flexible)
/// - Actions (fixed)
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::remainder().at_least(120.0), // Name
        Column::remainder().at_least(160.0), // Email
        Column::exact(PHONE_WIDTH),          // Phone
        Column::remainder().at_least(120.0), // Company
        Column::remainder().at_least(100.0), // City
        Column::exact(ACTIONS_WIDTH),        // Actions
    ]
}
