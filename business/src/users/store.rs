//! In-memory user records with create/update/delete.
//!
//! Ids are unique at all times: loads drop repeated ids, and creates get a
//! fresh id when the caller's is missing (`0`) or taken.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::error::StoreError;
use crate::user::User;

#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents with a freshly loaded list.
    pub fn replace_all(&mut self, users: Vec<User>) {
        let mut seen = HashSet::with_capacity(users.len());
        self.users = users
            .into_iter()
            .filter(|user| {
                let fresh = seen.insert(user.id);
                if !fresh {
                    warn!("Dropping user with duplicate id {}", user.id);
                }
                fresh
            })
            .collect();
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    /// Appends `user`, returning the id it was stored under.
    ///
    /// `now` seeds the generated id (milliseconds since the Unix epoch) when
    /// one has to be assigned.
    pub fn create(&mut self, mut user: User, now: DateTime<Utc>) -> u64 {
        if user.id == 0 || self.contains(user.id) {
            user.id = self.fresh_id(now);
        }
        debug!("Creating user {} ({})", user.id, user.name);
        let id = user.id;
        self.users.push(user);
        id
    }

    /// Replaces the record with the same id.
    pub fn update(&mut self, user: User) -> Result<(), StoreError> {
        let slot = self
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| StoreError::not_found(user.id))?;
        debug!("Updating user {}", user.id);
        *slot = user;
        Ok(())
    }

    /// Removes the record with `id`, returning it.
    pub fn delete(&mut self, id: u64) -> Result<User, StoreError> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        debug!("Deleting user {id}");
        Ok(self.users.remove(index))
    }

    fn fresh_id(&self, now: DateTime<Utc>) -> u64 {
        let mut id = u64::try_from(now.timestamp_millis()).unwrap_or(1).max(1);
        while self.contains(id) {
            id += 1;
        }
        id
    }
}
