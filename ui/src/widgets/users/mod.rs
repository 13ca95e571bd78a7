//! Users management module.
//!
//! This module contains the users panel widget and its submodules:
//! - `filters`: Per-column filter controls
//! - `modals`: Create/edit form and delete confirmation
//! - `panel`: Main panel widget
//! - `table`: Table rendering components (columns, header, row)

mod filters;
mod modals;
mod panel;
pub mod table;

pub use panel::users_panel;
