use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::movie::domain::Movie;
use crate::modules::movie::infrastructure::models::{MovieChangeset, MovieModel};
use crate::modules::score::domain::{Score, ScoreRepository};
use crate::modules::score::infrastructure::models::ScoreModel;
use crate::schema::{movies, scores};
use crate::shared::{
    errors::{AppError, AppResult},
    utils::logger::LogContext,
    Database,
};

pub struct ScoreRepositoryImpl {
    db: Arc<Database>,
}

impl ScoreRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScoreRepository for ScoreRepositoryImpl {
    async fn record(&self, score: &Score) -> AppResult<Movie> {
        let db = Arc::clone(&self.db);
        let row = ScoreModel::from(score);

        let updated = task::spawn_blocking(move || -> AppResult<MovieModel> {
            let start = std::time::Instant::now();
            let mut conn = db.get_connection()?;

            let updated = conn.transaction::<_, AppError, _>(|conn| {
                // Row lock serializes writers that do not share this process
                let current = movies::table
                    .filter(movies::id.eq(row.movie_id))
                    .select(MovieModel::as_select())
                    .for_update()
                    .first::<MovieModel>(conn)
                    .optional()?
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Movie with ID {} not found", row.movie_id))
                    })?;

                diesel::insert_into(scores::table)
                    .values(&row)
                    .execute(conn)?;

                let mut movie = Movie::from(current);
                movie.record_rating(row.value);
                let changeset = MovieChangeset::try_from(&movie)?;

                let updated = diesel::update(movies::table.filter(movies::id.eq(movie.id)))
                    .set(&changeset)
                    .returning(MovieModel::as_returning())
                    .get_result::<MovieModel>(conn)?;
                Ok(updated)
            })?;

            LogContext::db_operation(
                "record",
                "scores+movies",
                Some(start.elapsed().as_millis() as u64),
            );
            Ok(updated)
        })
        .await??;

        Ok(Movie::from(updated))
    }

    async fn find_by_movie(&self, movie_id: Uuid) -> AppResult<Vec<Score>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<ScoreModel>> {
            let mut conn = db.get_connection()?;
            let rows = scores::table
                .filter(scores::movie_id.eq(movie_id))
                .order((scores::created_at.asc(), scores::id.asc()))
                .select(ScoreModel::as_select())
                .load::<ScoreModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(Score::from).collect())
    }
}
