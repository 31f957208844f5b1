pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{ports::AuthenticationProvider, UserService};
pub use domain::{Role, User, UserDetails, UserRepository};
pub use infrastructure::{TaskLocalSecurityContext, UserRepositoryImpl};
