//! Users domain module.
//!
//! This module is the single home for:
//! - Screen state (`UsersState`): records, table state, open modal, form
//! - The in-memory record store and the create/edit form model
//! - The users API client and the background loader
//!
//! UI code under `ui/src/widgets/**` renders this state and calls its
//! methods; it does not mutate records on its own.

pub mod api;
pub mod form;
pub mod loader;
pub mod state;
pub mod store;

pub use form::UserForm;
pub use loader::{LoadResult, UsersLoader};
pub use state::{UserAction, UsersState};
pub use store::UserStore;
