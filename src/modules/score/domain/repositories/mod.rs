pub mod score_repository;

pub use score_repository::ScoreRepository;
#[cfg(test)]
pub use score_repository::MockScoreRepository;
