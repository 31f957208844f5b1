use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::utils::validation::{MAX_SCORE, MIN_SCORE};

/// A catalogued movie with its running score aggregate.
///
/// `score` is the mean of every rating recorded for the movie and is `0.0`
/// while `count` is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub score: f64,
    pub count: u32,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    pub fn new(title: impl Into<String>, image: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            score: 0.0,
            count: 0,
            image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable details, leaving the aggregate untouched
    pub fn update_details(&mut self, title: impl Into<String>, image: Option<String>) {
        self.title = title.into();
        self.image = image;
        self.touch();
    }

    /// Fold one more rating into the running mean.
    ///
    /// Uses `(score * count + rating) / (count + 1)` so the history is never
    /// rescanned.
    pub fn record_rating(&mut self, rating: f64) {
        let count = self.count + 1;
        let total = self.score * f64::from(self.count) + rating;
        self.score = (total / f64::from(count)).clamp(MIN_SCORE, MAX_SCORE);
        self.count = count;
        self.touch();
    }

    /// Reset the aggregate to the exact mean of `ratings`
    pub fn recompute_aggregate(&mut self, ratings: &[f64]) {
        self.count = ratings.len() as u32;
        self.score = if ratings.is_empty() {
            0.0
        } else {
            let sum: f64 = ratings.iter().sum();
            (sum / ratings.len() as f64).clamp(MIN_SCORE, MAX_SCORE)
        };
        self.touch();
    }

    pub fn has_ratings(&self) -> bool {
        self.count > 0
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
