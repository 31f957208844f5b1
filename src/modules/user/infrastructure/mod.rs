pub mod models;
pub mod persistence;
pub mod security_context;

pub use persistence::UserRepositoryImpl;
pub use security_context::TaskLocalSecurityContext;
