pub mod user_repository;

pub use user_repository::UserRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
