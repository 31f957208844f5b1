use std::sync::Arc;

use uuid::Uuid;

use super::dto::ScoreDto;
use crate::log_info;
use crate::modules::movie::{application::MovieDto, domain::MovieRepository};
use crate::modules::score::domain::ScoreAggregator;
use crate::modules::user::application::ports::AuthenticationProvider;
use crate::shared::errors::{AppError, AppResult};

/// Accepts ratings from the authenticated user
pub struct ScoreService {
    auth: Arc<dyn AuthenticationProvider>,
    movie_repo: Arc<dyn MovieRepository>,
    aggregator: Arc<ScoreAggregator>,
}

impl ScoreService {
    pub fn new(
        auth: Arc<dyn AuthenticationProvider>,
        movie_repo: Arc<dyn MovieRepository>,
        aggregator: Arc<ScoreAggregator>,
    ) -> Self {
        Self {
            auth,
            movie_repo,
            aggregator,
        }
    }

    pub async fn save_score(&self, dto: ScoreDto) -> AppResult<MovieDto> {
        dto.validate()?;

        let user = self.auth.authenticated().await?;

        if !self.movie_repo.exists(dto.movie_id).await? {
            return Err(AppError::NotFound(format!(
                "Movie with ID {} not found",
                dto.movie_id
            )));
        }

        let movie = self
            .aggregator
            .aggregate(dto.movie_id, user.id, dto.score)
            .await?;

        log_info!(
            "User {} scored movie {} with {} (now {:.2} over {})",
            user.username,
            movie.id,
            dto.score,
            movie.score,
            movie.count
        );
        Ok(MovieDto::from(movie))
    }

    /// Rebuild a movie's aggregate from its full rating history
    pub async fn recalculate(&self, movie_id: Uuid) -> AppResult<MovieDto> {
        let movie = self.aggregator.rebuild(movie_id).await?;
        Ok(MovieDto::from(movie))
    }
}
