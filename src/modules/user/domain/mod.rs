pub mod entities;
pub mod repositories;

pub use entities::{Role, User, UserDetails};
pub use repositories::UserRepository;
