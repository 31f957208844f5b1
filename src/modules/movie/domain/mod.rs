pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::Movie;
pub use repositories::MovieRepository;
