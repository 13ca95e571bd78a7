//! The displayable columns of the users table.
//!
//! `company` and `city` are read from the nested `company.name` and
//! `address.city` fields. Every column resolves to a string; absent values
//! resolve to the empty string so filtering and sorting never fail.

use crate::locale::Locale;
use crate::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Column {
    #[default]
    Name,
    Email,
    Phone,
    Company,
    City,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Company,
        Self::City,
    ];

    /// Resolves this column's value on `user`.
    #[inline]
    pub fn value(self, user: &User) -> &str {
        match self {
            Self::Name => &user.name,
            Self::Email => &user.email,
            Self::Phone => &user.phone,
            Self::Company => user.company_name().unwrap_or_default(),
            Self::City => user.city().unwrap_or_default(),
        }
    }

    /// Stable key, used to salt widget ids.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::City => "city",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Self::Name) => "Name",
            (Locale::En, Self::Email) => "Email",
            (Locale::En, Self::Phone) => "Phone",
            (Locale::En, Self::Company) => "Company",
            (Locale::En, Self::City) => "City",
            (Locale::Es, Self::Name) => "Nombre",
            (Locale::Es, Self::Email) => "Correo",
            (Locale::Es, Self::Phone) => "Celular",
            (Locale::Es, Self::Company) => "Empresa",
            (Locale::Es, Self::City) => "Ciudad",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{Address, Company};

    fn user() -> User {
        User {
            id: 1,
            name: "Ana".to_owned(),
            email: "ana@x.com".to_owned(),
            phone: "555".to_owned(),
            company: Some(Company {
                name: "Acme".to_owned(),
            }),
            address: Some(Address {
                city: "Lima".to_owned(),
            }),
        }
    }

    #[test]
    fn test_resolves_direct_and_nested_fields() {
        let u = user();
        assert_eq!(Column::Name.value(&u), "Ana");
        assert_eq!(Column::Email.value(&u), "ana@x.com");
        assert_eq!(Column::Phone.value(&u), "555");
        assert_eq!(Column::Company.value(&u), "Acme");
        assert_eq!(Column::City.value(&u), "Lima");
    }

    #[test]
    fn test_missing_nested_resolves_to_empty() {
        let u = User {
            company: None,
            address: None,
            ..user()
        };
        assert_eq!(Column::Company.value(&u), "");
        assert_eq!(Column::City.value(&u), "");
    }

    #[test]
    fn test_keys_are_distinct() {
        let keys: std::collections::BTreeSet<&str> =
            Column::ALL.iter().map(|column| column.key()).collect();
        assert_eq!(keys.len(), Column::ALL.len());
        assert_eq!(Column::City.key(), "city");
    }
}
