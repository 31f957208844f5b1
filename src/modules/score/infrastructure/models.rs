use crate::modules::score::domain::Score;
use crate::schema::scores;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Insertable, Identifiable, Associations, Debug, Clone)]
#[diesel(table_name = scores)]
#[diesel(belongs_to(crate::modules::movie::infrastructure::models::MovieModel, foreign_key = movie_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ScoreModel {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub value: f64,
    pub created_at: DateTime<Utc>,
}

impl From<ScoreModel> for Score {
    fn from(model: ScoreModel) -> Self {
        Score {
            id: model.id,
            movie_id: model.movie_id,
            user_id: model.user_id,
            value: model.value,
            created_at: model.created_at,
        }
    }
}

impl From<&Score> for ScoreModel {
    fn from(score: &Score) -> Self {
        ScoreModel {
            id: score.id,
            movie_id: score.movie_id,
            user_id: score.user_id,
            value: score.value,
            created_at: score.created_at,
        }
    }
}
