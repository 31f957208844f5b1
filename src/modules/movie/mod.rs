pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{MovieDto, MovieForm, MovieService};
pub use domain::{Movie, MovieRepository};
pub use infrastructure::persistence::MovieRepositoryImpl;
