//! Inputs of the create/edit user modal.

use crate::user::{Address, Company, User};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub city: String,
}

impl UserForm {
    /// Pre-fills the form from an existing record.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            company: user.company_name().unwrap_or_default().to_owned(),
            city: user.city().unwrap_or_default().to_owned(),
        }
    }

    /// Builds the record the form describes.
    ///
    /// Company and address are always present, even when left blank.
    pub fn to_user(&self, id: u64) -> User {
        User {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company: Some(Company {
                name: self.company.clone(),
            }),
            address: Some(Address {
                city: self.city.clone(),
            }),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
