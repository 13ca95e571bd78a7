//! Table components for the users screen.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Sortable header row
//! - `row`: Individual row rendering with cells

pub mod columns;
pub mod header;
pub mod row;
