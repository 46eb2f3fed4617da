use crate::error::AppError;
use crate::model::responses::SimpleResponse;
use async_trait::async_trait;

/// Interface for the account operations
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Starts the password reset flow for an account
    ///
    /// # Arguments
    /// * `email` - Email of the account to reset
    async fn forgot_password(&self, email: &str) -> Result<SimpleResponse, AppError>;
}
