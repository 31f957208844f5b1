use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};
use uuid::Uuid;

use crate::log_debug;
use crate::modules::movie::domain::{Movie, MovieRepository};
use crate::modules::score::domain::{Score, ScoreRepository};
use crate::modules::user::domain::{User, UserRepository};
use crate::shared::{
    application::pagination::{PaginatedResult, PaginationParams},
    errors::{AppError, AppResult},
};

/// Process-local store backing all three repository ports.
///
/// Mirrors the relational constraints of the postgres schema: a score needs
/// an existing movie, and a movie with scores cannot be deleted. Operations
/// touching both maps hold the movie entry first, then the score entry.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    movies: DashMap<Uuid, Movie>,
    scores: DashMap<Uuid, Vec<Score>>,
    users: DashMap<String, User>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a movie directly, bypassing validation
    pub fn insert_movie(&self, movie: Movie) -> Movie {
        self.movies.insert(movie.id, movie.clone());
        movie
    }

    /// Seed a user, replacing any user with the same username
    pub fn insert_user(&self, user: User) -> User {
        self.users.insert(user.username.clone(), user.clone());
        user
    }

    pub fn movie(&self, id: Uuid) -> Option<Movie> {
        self.movies.get(&id).map(|m| m.value().clone())
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn score_count(&self, movie_id: Uuid) -> usize {
        self.scores.get(&movie_id).map_or(0, |s| s.len())
    }
}

#[async_trait]
impl MovieRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Movie>> {
        Ok(self.movie(id))
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.movies.contains_key(&id))
    }

    async fn save(&self, movie: &Movie) -> AppResult<Movie> {
        let mut stored = movie.clone();
        if let Some(existing) = self.movies.get(&movie.id) {
            stored.created_at = existing.created_at;
        }
        self.movies.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        match self.movies.entry(id) {
            Entry::Vacant(_) => Err(AppError::NotFound(format!("Movie with ID {} not found", id))),
            Entry::Occupied(movie) => {
                if self.score_count(id) > 0 {
                    return Err(AppError::IntegrityConflict(format!(
                        "scores still reference movie {}",
                        id
                    )));
                }
                movie.remove();
                Ok(())
            }
        }
    }

    async fn search_by_title(
        &self,
        title: &str,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<Movie>> {
        let needle = title.trim().to_lowercase();

        let mut matches: Vec<Movie> = self
            .movies
            .iter()
            .filter(|entry| entry.title.to_lowercase().contains(&needle))
            .map(|entry| entry.value().clone())
            .collect();
        matches.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));

        let total = matches.len() as u64;
        let items: Vec<Movie> = matches
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect();

        log_debug!(
            "In-memory search '{}' matched {} movies, returning {}",
            needle,
            total,
            items.len()
        );
        Ok(PaginatedResult::new(items, total, &pagination))
    }
}

#[async_trait]
impl ScoreRepository for InMemoryStore {
    async fn record(&self, score: &Score) -> AppResult<Movie> {
        let mut movie = self.movies.get_mut(&score.movie_id).ok_or_else(|| {
            AppError::NotFound(format!("Movie with ID {} not found", score.movie_id))
        })?;

        self.scores
            .entry(score.movie_id)
            .or_default()
            .push(score.clone());
        movie.record_rating(score.value);

        Ok(movie.value().clone())
    }

    async fn find_by_movie(&self, movie_id: Uuid) -> AppResult<Vec<Score>> {
        Ok(self
            .scores
            .get(&movie_id)
            .map(|s| s.value().clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.users.get(username).map(|u| u.value().clone()))
    }
}
