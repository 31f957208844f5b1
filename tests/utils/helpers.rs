/// Test helper functions and service builders
use dsmovie_lib::infrastructure::InMemoryStore;
use dsmovie_lib::modules::user::{TaskLocalSecurityContext, User};
use dsmovie_lib::AppServices;
use std::future::Future;
use std::sync::Arc;

use super::factories::UserFactory;

/// Services over a fresh in-memory store
pub fn in_memory_services() -> (Arc<InMemoryStore>, AppServices) {
    let store = Arc::new(InMemoryStore::new());
    let services = AppServices::in_memory(Arc::clone(&store));
    (store, services)
}

/// Register a client user in the store
pub fn seed_user(store: &InMemoryStore, username: &str) -> User {
    store.insert_user(UserFactory::new().with_username(username).build())
}

/// Run `fut` authenticated as `username`
pub async fn as_user<F: Future>(username: &str, fut: F) -> F::Output {
    TaskLocalSecurityContext::scope(username, fut).await
}
