use std::sync::OnceLock;

use regex::Regex;

use crate::shared::errors::AppError;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 5.0;

const MIN_TITLE_LEN: usize = 5;
const MAX_TITLE_LEN: usize = 80;
const MAX_PAGE_SIZE: u32 = 100;

fn image_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("image url pattern is valid")
    })
}

pub struct Validator;

impl Validator {
    pub fn validate_movie_title(title: &str) -> Result<(), AppError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        let len = trimmed.chars().count();
        if !(MIN_TITLE_LEN..=MAX_TITLE_LEN).contains(&len) {
            return Err(AppError::ValidationError(format!(
                "Title must be between {} and {} characters",
                MIN_TITLE_LEN, MAX_TITLE_LEN
            )));
        }
        Ok(())
    }

    pub fn validate_image_url(image: Option<&str>) -> Result<(), AppError> {
        match image {
            Some(url) if !image_url_pattern().is_match(url) => Err(AppError::ValidationError(
                format!("Image must be an http(s) URL: {}", url),
            )),
            _ => Ok(()),
        }
    }

    pub fn validate_score(score: f64) -> Result<(), AppError> {
        if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(AppError::ValidationError(format!(
                "Score must be between {} and {}",
                MIN_SCORE, MAX_SCORE
            )));
        }
        Ok(())
    }

    pub fn validate_pagination(page: u32, page_size: u32) -> Result<(), AppError> {
        if page == 0 {
            return Err(AppError::ValidationError(
                "Page numbers start at 1".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(AppError::ValidationError(
                "Page size must be positive".to_string(),
            ));
        }
        if page_size > MAX_PAGE_SIZE {
            return Err(AppError::ValidationError(format!(
                "Page size cannot exceed {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }
}
