use async_trait::async_trait;

use crate::modules::user::domain::User;
use crate::shared::errors::AppResult;

/// Resolves the caller of the current operation.
///
/// Fails with `AppError::Unauthenticated` when no identity is established.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationProvider: Send + Sync {
    async fn authenticated(&self) -> AppResult<User>;
}
