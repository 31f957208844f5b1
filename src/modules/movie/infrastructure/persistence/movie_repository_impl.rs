use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::log_debug;
use crate::modules::movie::domain::{Movie, MovieRepository};
use crate::modules::movie::infrastructure::models::{MovieChangeset, MovieModel, NewMovie};
use crate::schema::movies;
use crate::shared::utils::logger::TimedOperation;
use crate::shared::{
    application::pagination::{PaginatedResult, PaginationParams},
    errors::{AppError, AppResult},
    Database,
};

pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// `%needle%` with LIKE wildcards in the needle escaped
    fn like_pattern(needle: &str) -> String {
        let escaped = needle
            .trim()
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        format!("%{}%", escaped)
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Movie>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<MovieModel>> {
            let mut conn = db.get_connection()?;
            let m = movies::table
                .filter(movies::id.eq(id))
                .select(MovieModel::as_select())
                .first::<MovieModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Movie::from))
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let found = diesel::select(diesel::dsl::exists(
                movies::table.filter(movies::id.eq(id)),
            ))
            .get_result::<bool>(&mut conn)?;
            Ok(found)
        })
        .await?
    }

    async fn save(&self, movie: &Movie) -> AppResult<Movie> {
        log_debug!("Repository saving movie: {} (ID: {})", movie.title, movie.id);

        let db = Arc::clone(&self.db);
        let new_movie = NewMovie::try_from(movie)?;
        let changeset = MovieChangeset::try_from(movie)?;

        let saved = task::spawn_blocking(move || -> AppResult<MovieModel> {
            let mut conn = db.get_connection()?;
            let row = diesel::insert_into(movies::table)
                .values(&new_movie)
                .on_conflict(movies::id)
                .do_update()
                .set(&changeset)
                .returning(MovieModel::as_returning())
                .get_result::<MovieModel>(&mut conn)?;
            Ok(row)
        })
        .await??;

        Ok(Movie::from(saved))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let deleted =
                diesel::delete(movies::table.filter(movies::id.eq(id))).execute(&mut conn)?;
            if deleted == 0 {
                return Err(AppError::NotFound(format!(
                    "Movie with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await?
    }

    async fn search_by_title(
        &self,
        title: &str,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<Movie>> {
        let timer = TimedOperation::new("movies.search_by_title");
        let db = Arc::clone(&self.db);
        let pattern = Self::like_pattern(title);

        let (rows, total) = task::spawn_blocking(move || -> AppResult<(Vec<MovieModel>, i64)> {
            let mut conn = db.get_connection()?;

            // Count and page read one snapshot
            conn.build_transaction()
                .read_only()
                .repeatable_read()
                .run::<_, AppError, _>(|conn| {
                    let total = movies::table
                        .filter(movies::title.ilike(&pattern))
                        .count()
                        .get_result::<i64>(conn)?;

                    let rows = movies::table
                        .filter(movies::title.ilike(&pattern))
                        .order((movies::title.asc(), movies::id.asc()))
                        .offset(pagination.offset())
                        .limit(pagination.limit())
                        .select(MovieModel::as_select())
                        .load::<MovieModel>(conn)?;

                    Ok((rows, total))
                })
        })
        .await??;

        timer.finish_with_info(&format!("{} of {} rows", rows.len(), total));

        let items = rows.into_iter().map(Movie::from).collect();
        Ok(PaginatedResult::new(items, total.max(0) as u64, &pagination))
    }
}
