pub mod entities;
pub mod repositories;
pub mod services;

// Re-exports for easy access
pub use entities::Score;
pub use repositories::ScoreRepository;
pub use services::ScoreAggregator;
