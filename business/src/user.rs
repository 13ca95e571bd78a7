//! User records as returned by the remote users API.

use serde::Deserialize;

/// Company a user works for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

/// Postal address of a user. Only the city is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: String,
}

/// A single user record.
///
/// Unknown JSON fields (`username`, `website`, geo coordinates, ...) are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl User {
    /// Name of the user's company, if any.
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().map(|c| c.name.as_str())
    }

    /// City of the user's address, if any.
    pub fn city(&self) -> Option<&str> {
        self.address.as_ref().map(|a| a.city.as_str())
    }
}
