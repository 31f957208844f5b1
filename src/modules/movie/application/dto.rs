use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::movie::domain::Movie;
use crate::shared::{errors::AppResult, utils::Validator};

/// Public view of a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: Uuid,
    pub title: String,
    pub score: f64,
    pub count: u32,
    pub image: Option<String>,
}

impl From<&Movie> for MovieDto {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            score: movie.score,
            count: movie.count,
            image: movie.image.clone(),
        }
    }
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            score: movie.score,
            count: movie.count,
            image: movie.image,
        }
    }
}

/// Editable movie fields, used by insert and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieForm {
    pub title: String,
    pub image: Option<String>,
}

impl MovieForm {
    pub fn new(title: impl Into<String>, image: Option<String>) -> Self {
        Self {
            title: title.into(),
            image,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_movie_title(&self.title)?;
        Validator::validate_image_url(self.image.as_deref())
    }
}

impl From<&MovieDto> for MovieForm {
    fn from(dto: &MovieDto) -> Self {
        Self {
            title: dto.title.clone(),
            image: dto.image.clone(),
        }
    }
}
