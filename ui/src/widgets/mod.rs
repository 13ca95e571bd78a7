mod users;

pub use users::table;
pub use users::users_panel;
