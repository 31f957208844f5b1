use async_trait::async_trait;

use crate::modules::user::domain::entities::User;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by username, with its roles loaded
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}
