//! State of the users screen.
//!
//! UI code reads this state and calls its methods; it never edits the store
//! or the table state directly.
//! - `store` holds the records, mutated only by create/update/delete.
//! - `table` is replaced wholesale on every transition (see `dispatch`).
//! - `current_action` drives which modal is open.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use super::form::UserForm;
use super::loader::LoadResult;
use super::store::UserStore;
use crate::table_state::{TableAction, TableState};
use crate::user::User;

/// Modal currently shown on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserAction {
    #[default]
    None,

    /// Create form.
    Create,

    /// Edit form for the user with this id.
    Edit(u64),

    /// Delete confirmation for the user with this id.
    Delete(u64),
}

#[derive(Debug, Default)]
pub struct UsersState {
    pub store: UserStore,

    pub table: TableState,

    /// Whether the initial load is running.
    pub is_fetching: bool,

    /// Error message if the load failed.
    pub error: Option<String>,

    pub last_fetch: Option<DateTime<Utc>>,

    pub current_action: UserAction,

    /// Inputs of the create/edit modal.
    pub form: UserForm,

    /// Error raised by the last modal submission.
    pub action_error: Option<String>,
}

impl UsersState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
        self.error = None;
    }

    /// Replaces the records with a successful load.
    pub fn update_users(&mut self, users: Vec<User>, now: DateTime<Utc>) {
        info!("Loaded {} users", users.len());
        self.store.replace_all(users);
        self.is_fetching = false;
        self.error = None;
        self.last_fetch = Some(now);
    }

    /// Records a failed load. The store keeps its previous contents.
    pub fn set_error(&mut self, error: String) {
        warn!("Failed to load users: {error}");
        self.error = Some(error);
        self.is_fetching = false;
    }

    pub fn apply_load_result(&mut self, result: LoadResult, now: DateTime<Utc>) {
        match result {
            Ok(users) => self.update_users(users, now),
            Err(err) => self.set_error(err.to_string()),
        }
    }

    /// Applies a table transition. Returns whether the table state changed.
    pub fn dispatch(&mut self, action: TableAction) -> bool {
        debug!("Table action: {action:?}");
        let next = self.table.reduce(action);
        let changed = next != self.table;
        self.table = next;
        changed
    }

    /// Rows to display: the store filtered and sorted by the table state.
    pub fn visible_users(&self) -> Vec<User> {
        self.table.view(self.store.users())
    }

    pub fn open_create_modal(&mut self) {
        self.start_action(UserAction::Create);
    }

    /// Opens a modal, preparing the form for it.
    pub fn start_action(&mut self, action: UserAction) {
        self.current_action = action;
        self.action_error = None;

        match action {
            UserAction::Edit(id) => match self.store.get(id) {
                Some(user) => self.form = UserForm::from_user(user),
                None => self.form.clear(),
            },
            UserAction::Create | UserAction::Delete(_) | UserAction::None => self.form.clear(),
        }
    }

    /// Closes the current modal without touching the store.
    pub fn close_action(&mut self) {
        self.current_action = UserAction::None;
        self.action_error = None;
        self.form.clear();
    }

    /// Saves the create/edit form. Returns the id of the saved record.
    pub fn submit_form(&mut self, now: DateTime<Utc>) -> Option<u64> {
        match self.current_action {
            UserAction::Create => {
                let id = self.store.create(self.form.to_user(0), now);
                self.close_action();
                Some(id)
            }
            UserAction::Edit(id) => match self.store.update(self.form.to_user(id)) {
                Ok(()) => {
                    self.close_action();
                    Some(id)
                }
                Err(err) => {
                    self.action_error = Some(err.to_string());
                    None
                }
            },
            UserAction::Delete(_) | UserAction::None => None,
        }
    }

    /// Deletes the user awaiting confirmation.
    ///
    /// Does nothing unless a delete confirmation is open.
    pub fn confirm_delete(&mut self) -> Option<User> {
        let UserAction::Delete(id) = self.current_action else {
            return None;
        };

        match self.store.delete(id) {
            Ok(user) => {
                info!("Deleted user {id}");
                self.close_action();
                Some(user)
            }
            Err(err) => {
                self.action_error = Some(err.to_string());
                None
            }
        }
    }

    // =====================
    // Getters
    // =====================

    pub fn users(&self) -> &[User] {
        self.store.users()
    }

    pub fn current_action(&self) -> UserAction {
        self.current_action
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }
}
