use std::sync::Arc;

use uuid::Uuid;

use super::dto::{MovieDto, MovieForm};
use crate::modules::movie::domain::{Movie, MovieRepository};
use crate::shared::{
    application::pagination::{PaginatedResult, PaginationParams},
    errors::{AppError, AppResult},
    utils::logger::LogContext,
};
use crate::{log_debug, log_info, log_warn};

/// Query/command service over the movie catalogue
pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }

    pub async fn find_all(
        &self,
        title: &str,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<MovieDto>> {
        pagination.validate()?;
        LogContext::search_operation(title, None);

        let page = self.movie_repo.search_by_title(title, pagination).await?;

        LogContext::search_operation(title, Some(page.number_of_elements()));
        Ok(page.map(MovieDto::from))
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<MovieDto> {
        let movie = self
            .movie_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        Ok(MovieDto::from(movie))
    }

    pub async fn insert(&self, form: MovieForm) -> AppResult<MovieDto> {
        form.validate()?;

        let movie = Movie::new(form.title.trim(), form.image);
        let saved = self.movie_repo.save(&movie).await?;

        log_info!("Inserted movie {} ({})", saved.title, saved.id);
        Ok(MovieDto::from(saved))
    }

    pub async fn update(&self, id: Uuid, form: MovieForm) -> AppResult<MovieDto> {
        form.validate()?;

        // Existence is settled before anything is written
        let mut movie = self
            .movie_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        movie.update_details(form.title.trim(), form.image);
        let saved = self.movie_repo.save(&movie).await?;

        log_debug!("Updated movie {}", id);
        Ok(MovieDto::from(saved))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.movie_repo.exists(id).await? {
            return Err(Self::not_found(id));
        }

        match self.movie_repo.delete(id).await {
            Ok(()) => {
                log_info!("Deleted movie {}", id);
                Ok(())
            }
            Err(AppError::IntegrityConflict(reason)) => {
                log_warn!("Refusing to delete movie {}: {}", id, reason);
                Err(AppError::IntegrityConflict(format!(
                    "Movie {} is still referenced by other records",
                    id
                )))
            }
            Err(e) => Err(e),
        }
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::NotFound(format!("Movie with ID {} not found", id))
    }
}
