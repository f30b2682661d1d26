use crate::error::AppError;
use crate::presentation::user::{User, UserRequest};
use async_trait::async_trait;

/// Interface for the user endpoints
///
/// These endpoints require the "Manage users" permission.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists users
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    /// Reads a single user
    async fn get_user(&self, id: u64) -> Result<User, AppError>;

    /// Creates a user
    async fn create_user(&self, request: &UserRequest) -> Result<User, AppError>;

    /// Updates the fields set in `request`
    async fn update_user(&self, id: u64, request: &UserRequest) -> Result<User, AppError>;

    /// Deletes a user
    ///
    /// # Arguments
    /// * `id` - User to delete
    /// * `migrate_ownership_id` - User receiving ownership of the deleted user's content
    async fn delete_user(&self, id: u64, migrate_ownership_id: Option<u64>) -> Result<(), AppError>;
}
