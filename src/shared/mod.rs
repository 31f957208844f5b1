// Shared kernel used by every bounded context

pub mod application; // Shared application layer patterns
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (database)
pub mod utils; // Shared utilities (logging, validation)

// Re-exports for convenience
pub use config::{AppConfig, DatabaseConfig};
pub use infrastructure::database::Database;
