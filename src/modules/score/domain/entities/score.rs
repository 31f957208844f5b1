use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One rating submitted by a user for a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub value: f64,
    pub created_at: DateTime<Utc>,
}

impl Score {
    pub fn new(movie_id: Uuid, user_id: Uuid, value: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            movie_id,
            user_id,
            value,
            created_at: Utc::now(),
        }
    }
}
