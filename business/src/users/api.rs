//! Users API client.
//!
//! The remote source is read once; create/update/delete never leave the
//! in-memory store.

use log::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::http::Client;
use crate::user::User;

/// GET `{users_url}`, expecting a JSON array of users.
pub async fn list_users(users_url: &str) -> ApiResult<Vec<User>> {
    info!("Fetching users from {users_url}");

    let response = Client::get(users_url)
        .header("accept", "application/json")
        .send()
        .await?;

    if !response.is_success() {
        warn!("Users API returned status {}", response.status);
        return Err(ApiError::Status {
            status: response.status,
        });
    }

    let users: Vec<User> = response.json()?;
    info!("Fetched {} users", users.len());
    Ok(users)
}
