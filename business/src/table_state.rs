//! Sort/filter configuration of the users table.
//!
//! `TableState` is an immutable value: transitions go through
//! [`TableState::reduce`], which returns the next state and leaves the
//! previous one untouched. The UI compares the two to decide whether the
//! table changed.

use crate::column::Column;
use crate::filter::{FilterMap, FilterSpec, apply_filters};
use crate::sort::{SortOrder, apply_sorting};
use crate::user::User;

/// A transition of the table state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Header click: toggle direction on the active column, otherwise
    /// switch to `column` ascending.
    SetSort(Column),

    /// Insert or replace the filter on one column.
    SetFilter(Column, FilterSpec),

    /// Drop every filter.
    ResetFilters,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableState {
    pub sort_key: Column,
    pub sort_order: SortOrder,
    pub filters: FilterMap,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `action`, returning the next state.
    #[must_use]
    pub fn reduce(&self, action: TableAction) -> Self {
        match action {
            TableAction::SetSort(column) => {
                let sort_order = if self.sort_key == column {
                    self.sort_order.toggled()
                } else {
                    SortOrder::Asc
                };
                Self {
                    sort_key: column,
                    sort_order,
                    filters: self.filters.clone(),
                }
            }
            TableAction::SetFilter(column, spec) => {
                let mut filters = self.filters.clone();
                filters.insert(column, spec);
                Self {
                    filters,
                    ..self.clone()
                }
            }
            TableAction::ResetFilters => Self {
                filters: FilterMap::new(),
                ..self.clone()
            },
        }
    }

    /// The filter currently set on `column`, or the selector's default
    /// (`contains ""`) when none is.
    pub fn filter_for(&self, column: Column) -> FilterSpec {
        self.filters.get(&column).cloned().unwrap_or_default()
    }

    /// Sort direction of `column` if it is the active sort key.
    pub fn sort_indicator(&self, column: Column) -> Option<SortOrder> {
        (self.sort_key == column).then_some(self.sort_order)
    }

    /// Derives the displayed rows: filter, then sort.
    pub fn view(&self, records: &[User]) -> Vec<User> {
        let filtered = apply_filters(records, &self.filters);
        apply_sorting(&filtered, self.sort_key, self.sort_order)
    }
}
