//! Business layer of the roster users screen.
//!
//! The table pipeline is pure: [`TableState::view`] filters the records with
//! [`apply_filters`] and orders them with [`apply_sorting`]. Everything
//! stateful lives in [`UsersState`].

mod column;
mod config;
mod error;
mod filter;
pub mod http;
mod locale;
mod sort;
mod table_state;
mod user;
pub mod users;

pub use column::Column;
pub use config::{BusinessConfig, DEFAULT_API_BASE_URL};
pub use error::{ApiError, ApiResult, StoreError};
pub use filter::{FilterKind, FilterMap, FilterSpec, apply_filters, evaluate};
pub use locale::{Locale, Strings};
pub use sort::{SortOrder, apply_sorting};
pub use table_state::{TableAction, TableState};
pub use user::{Address, Company, User};
pub use users::{LoadResult, UserAction, UserForm, UserStore, UsersLoader, UsersState};
