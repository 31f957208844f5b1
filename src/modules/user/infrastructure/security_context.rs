use std::future::Future;

use crate::modules::user::application::ports::SecurityContext;

tokio::task_local! {
    static CURRENT_PRINCIPAL: String;
}

/// Principal carried in a tokio task-local.
///
/// A transport wraps each request future with [`TaskLocalSecurityContext::scope`];
/// code running outside such a scope sees no principal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskLocalSecurityContext;

impl TaskLocalSecurityContext {
    /// Run `fut` with `username` as the current principal
    pub async fn scope<F: Future>(username: impl Into<String>, fut: F) -> F::Output {
        CURRENT_PRINCIPAL.scope(username.into(), fut).await
    }
}

impl SecurityContext for TaskLocalSecurityContext {
    fn current_username(&self) -> Option<String> {
        CURRENT_PRINCIPAL.try_with(|username| username.clone()).ok()
    }
}
