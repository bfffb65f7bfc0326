use crate::error::AppError;
use crate::presentation::user::User;
use async_trait::async_trait;

/// Interface for user lookups
#[async_trait]
pub trait UserService: Send + Sync {
    /// Looks a user up by email
    ///
    /// # Returns
    /// * `Ok(User)` - The user
    /// * `Err(AppError::NotFound)` - No user owns `email`
    /// * `Err(AppError::Validation)` - `email` is not an email address
    async fn get_user_by_email(&self, email: &str) -> Result<User, AppError>;
}
