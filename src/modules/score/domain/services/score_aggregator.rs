use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::movie::domain::{Movie, MovieRepository};
use crate::modules::score::domain::{entities::Score, repositories::ScoreRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

/// Maintains each movie's running score aggregate.
///
/// Every read-modify-write of a movie's `(score, count)` pair runs under a
/// mutex dedicated to that movie, so concurrent submissions to the same movie
/// cannot lose updates while submissions to different movies never contend.
/// Lock entries are dropped from the registry once nobody holds or waits on
/// them.
pub struct ScoreAggregator {
    movie_repo: Arc<dyn MovieRepository>,
    score_repo: Arc<dyn ScoreRepository>,
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl ScoreAggregator {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        score_repo: Arc<dyn ScoreRepository>,
    ) -> Self {
        Self {
            movie_repo,
            score_repo,
            locks: DashMap::new(),
        }
    }

    /// Record `value` for `movie_id` and return the updated movie.
    ///
    /// Fails with `NotFound` before writing anything when the movie is
    /// missing. The rating and the new aggregate are stored together or not
    /// at all.
    pub async fn aggregate(&self, movie_id: Uuid, user_id: Uuid, value: f64) -> AppResult<Movie> {
        let lock = self.lock_for(movie_id);
        let result = {
            let _guard = lock.lock().await;
            self.apply_rating(movie_id, user_id, value).await
        };
        drop(lock);
        self.release(movie_id);
        result
    }

    /// Recompute `(score, count)` from the stored rating history
    pub async fn rebuild(&self, movie_id: Uuid) -> AppResult<Movie> {
        let lock = self.lock_for(movie_id);
        let result = {
            let _guard = lock.lock().await;
            self.recompute(movie_id).await
        };
        drop(lock);
        self.release(movie_id);
        result
    }

    /// Number of movies with a live lock entry
    pub fn tracked_locks(&self) -> usize {
        self.locks.len()
    }

    async fn apply_rating(&self, movie_id: Uuid, user_id: Uuid, value: f64) -> AppResult<Movie> {
        let before = self.load(movie_id).await?;

        let score = Score::new(movie_id, user_id, value);
        let saved = self.score_repo.record(&score).await?;

        log_debug!(
            "Movie {} aggregate {:.4}/{} -> {:.4}/{}",
            movie_id,
            before.score,
            before.count,
            saved.score,
            saved.count
        );
        Ok(saved)
    }

    async fn recompute(&self, movie_id: Uuid) -> AppResult<Movie> {
        let mut movie = self.load(movie_id).await?;

        let history = self.score_repo.find_by_movie(movie_id).await?;
        let ratings: Vec<f64> = history.iter().map(|s| s.value).collect();
        movie.recompute_aggregate(&ratings);

        let saved = self.movie_repo.save(&movie).await?;
        log_info!(
            "Rebuilt aggregate for movie {} from {} ratings",
            movie_id,
            ratings.len()
        );
        Ok(saved)
    }

    async fn load(&self, movie_id: Uuid) -> AppResult<Movie> {
        self.movie_repo
            .find_by_id(movie_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", movie_id)))
    }

    fn lock_for(&self, movie_id: Uuid) -> Arc<Mutex<()>> {
        Arc::clone(self.locks.entry(movie_id).or_default().value())
    }

    fn release(&self, movie_id: Uuid) {
        // Only the registry's own reference left: no holder, no waiter
        self.locks
            .remove_if(&movie_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}
