use crate::modules::movie::domain::Movie;
use crate::schema::movies;
use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MovieModel {
    pub id: Uuid,
    pub title: String,
    pub score: f64,
    pub count: i32,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new movies
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct NewMovie {
    pub id: Uuid,
    pub title: String,
    pub score: f64,
    pub count: i32,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For updating existing movies (excludes id and created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = movies)]
#[diesel(treat_none_as_null = true)]
pub struct MovieChangeset {
    pub title: String,
    pub score: f64,
    pub count: i32,
    pub image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<MovieModel> for Movie {
    fn from(model: MovieModel) -> Self {
        Movie {
            id: model.id,
            title: model.title,
            score: model.score,
            count: model.count.max(0) as u32,
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Stored rating count; the column is a signed 32-bit integer
fn stored_count(movie: &Movie) -> AppResult<i32> {
    i32::try_from(movie.count).map_err(|_| {
        AppError::ValidationError(format!(
            "Rating count {} of movie {} exceeds the storable range",
            movie.count, movie.id
        ))
    })
}

impl TryFrom<&Movie> for NewMovie {
    type Error = AppError;

    fn try_from(movie: &Movie) -> AppResult<Self> {
        Ok(NewMovie {
            id: movie.id,
            title: movie.title.clone(),
            score: movie.score,
            count: stored_count(movie)?,
            image: movie.image.clone(),
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        })
    }
}

impl TryFrom<&Movie> for MovieChangeset {
    type Error = AppError;

    fn try_from(movie: &Movie) -> AppResult<Self> {
        Ok(MovieChangeset {
            title: movie.title.clone(),
            score: movie.score,
            count: stored_count(movie)?,
            image: movie.image.clone(),
            updated_at: movie.updated_at,
        })
    }
}
