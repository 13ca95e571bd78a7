//! The sort stage.

use crate::column::Column;
use crate::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Arrow shown next to the active column header.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

/// Returns a sorted copy of `records`, ordered by `key`.
///
/// Values are compared lower-cased, in byte order of their UTF-8 encoding
/// (the same as code point order). This differs from UTF-16 code unit order
/// only between characters above U+FFFF and those in U+E000..=U+FFFF.
/// The sort is stable in both directions: records with equal values keep
/// their input order.
pub fn apply_sorting(records: &[User], key: Column, order: SortOrder) -> Vec<User> {
    let mut keyed: Vec<(String, &User)> = records
        .iter()
        .map(|user| (key.value(user).to_lowercase(), user))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match order {
        SortOrder::Asc => a.cmp(b),
        SortOrder::Desc => b.cmp(a),
    });

    keyed.into_iter().map(|(_, user)| user.clone()).collect()
}
