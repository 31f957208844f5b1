use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::movie::domain::entities::Movie;
use crate::shared::{
    application::pagination::{PaginatedResult, PaginationParams},
    errors::AppResult,
};

/// Port (interface) for movie storage.
///
/// Adapters translate store-specific constraint failures into
/// `AppError::IntegrityConflict`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Find movie by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Movie>>;

    /// Check if movie exists
    async fn exists(&self, id: Uuid) -> AppResult<bool>;

    /// Insert or update a movie
    async fn save(&self, movie: &Movie) -> AppResult<Movie>;

    /// Delete movie by ID; fails while scores still reference it
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Case-insensitive title substring search, ordered by title then id
    async fn search_by_title(
        &self,
        title: &str,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<Movie>>;
}
