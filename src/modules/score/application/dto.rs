use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::{errors::AppResult, utils::Validator};

/// A rating submitted for a movie by the authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDto {
    pub movie_id: Uuid,
    pub score: f64,
}

impl ScoreDto {
    pub fn new(movie_id: Uuid, score: f64) -> Self {
        Self { movie_id, score }
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_score(self.score)
    }
}
