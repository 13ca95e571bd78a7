//! Per-column predicates and the filter stage.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::column::Column;
use crate::locale::Locale;
use crate::user::User;

/// Comparison applied between a column value and the filter text.
///
/// `Unknown` stands for any kind name the screen does not recognise. It
/// never excludes a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKind {
    #[default]
    Contains,
    NotContains,
    Equals,
    NotEquals,
    StartsWith,
    EndsWith,
    Unknown,
}

impl FilterKind {
    /// The six selectable kinds, in the order the selector offers them.
    pub const SELECTABLE: [Self; 6] = [
        Self::Contains,
        Self::NotContains,
        Self::Equals,
        Self::NotEquals,
        Self::StartsWith,
        Self::EndsWith,
    ];

    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Self::Contains) => "Contains",
            (Locale::En, Self::NotContains) => "Does not contain",
            (Locale::En, Self::Equals) => "Equals",
            (Locale::En, Self::NotEquals) => "Not equal",
            (Locale::En, Self::StartsWith) => "Starts with",
            (Locale::En, Self::EndsWith) => "Ends with",
            (Locale::Es, Self::Contains) => "Contiene",
            (Locale::Es, Self::NotContains) => "No Contiene",
            (Locale::Es, Self::Equals) => "Igual",
            (Locale::Es, Self::NotEquals) => "No Igual",
            (Locale::Es, Self::StartsWith) => "Empieza con",
            (Locale::Es, Self::EndsWith) => "Termina con",
            (_, Self::Unknown) => "?",
        }
    }
}

impl FromStr for FilterKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "contains" => Self::Contains,
            "not_contains" => Self::NotContains,
            "equals" => Self::Equals,
            "not_equals" => Self::NotEquals,
            "starts_with" => Self::StartsWith,
            "ends_with" => Self::EndsWith,
            _ => Self::Unknown,
        })
    }
}

impl<'de> Deserialize<'de> for FilterKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let Ok(kind) = raw.parse::<Self>();
        Ok(kind)
    }
}

/// A filter on one column: a predicate kind and the text to compare with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct FilterSpec {
    #[serde(rename = "type")]
    pub kind: FilterKind,
    pub value: String,
}

impl FilterSpec {
    pub fn new(kind: FilterKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Whether `candidate` passes this filter.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        evaluate(self.kind, candidate, &self.value)
    }
}

/// Active filters keyed by column. A missing key means no filter.
pub type FilterMap = BTreeMap<Column, FilterSpec>;

/// Evaluates one predicate, case-insensitively.
pub fn evaluate(kind: FilterKind, candidate: &str, needle: &str) -> bool {
    let candidate = candidate.to_lowercase();
    let needle = needle.to_lowercase();

    match kind {
        FilterKind::Contains => candidate.contains(&needle),
        FilterKind::NotContains => !candidate.contains(&needle),
        FilterKind::Equals => candidate == needle,
        FilterKind::NotEquals => candidate != needle,
        FilterKind::StartsWith => candidate.starts_with(&needle),
        FilterKind::EndsWith => candidate.ends_with(&needle),
        FilterKind::Unknown => true,
    }
}

/// Keeps the records that satisfy every filter, in their original order.
pub fn apply_filters(records: &[User], filters: &FilterMap) -> Vec<User> {
    records
        .iter()
        .filter(|user| {
            filters
                .iter()
                .all(|(column, spec)| spec.matches(column.value(user)))
        })
        .cloned()
        .collect()
}
