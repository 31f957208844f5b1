use std::sync::Arc;

use async_trait::async_trait;

use super::ports::{AuthenticationProvider, SecurityContext};
use crate::log_debug;
use crate::modules::user::domain::{User, UserDetails, UserRepository};
use crate::shared::errors::{AppError, AppResult};

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    security_context: Arc<dyn SecurityContext>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        security_context: Arc<dyn SecurityContext>,
    ) -> Self {
        Self {
            user_repo,
            security_context,
        }
    }

    /// Credentials and authorities for `username`
    pub async fn load_user_by_username(&self, username: &str) -> AppResult<UserDetails> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", username)))?;

        Ok(UserDetails::from(&user))
    }
}

#[async_trait]
impl AuthenticationProvider for UserService {
    async fn authenticated(&self) -> AppResult<User> {
        let username = self
            .security_context
            .current_username()
            .ok_or_else(|| AppError::Unauthenticated("No authenticated principal".to_string()))?;

        log_debug!("Resolving authenticated user {}", username);

        self.user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| AppError::Unauthenticated(format!("User {} not found", username)))
    }
}
