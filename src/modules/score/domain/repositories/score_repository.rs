use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::movie::domain::Movie;
use crate::modules::score::domain::entities::Score;
use crate::shared::errors::AppResult;

/// Port for the per-movie rating history
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Append `score` and fold it into its movie's aggregate as one unit.
    ///
    /// Returns the updated movie. Fails with `NotFound` when the movie does
    /// not exist; on any failure neither the rating nor the aggregate change.
    async fn record(&self, score: &Score) -> AppResult<Movie>;

    /// All ratings of a movie in submission order
    async fn find_by_movie(&self, movie_id: Uuid) -> AppResult<Vec<Score>>;
}
