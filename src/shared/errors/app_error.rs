use diesel::result::DatabaseErrorKind;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Integrity conflict: {0}")]
    IntegrityConflict(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => {
                AppError::NotFound("Record not found in database".to_string())
            }
            diesel::result::Error::DatabaseError(
                kind @ (DatabaseErrorKind::ForeignKeyViolation | DatabaseErrorKind::UniqueViolation),
                info,
            ) => {
                let constraint = info.constraint_name().unwrap_or("unknown constraint");
                AppError::IntegrityConflict(format!(
                    "{:?} on {}: {}",
                    kind,
                    constraint,
                    info.message()
                ))
            }
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking task failed: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("Serialization failed: {}", err))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::ValidationError(format!("Invalid UUID: {}", err))
    }
}

impl AppError {
    /// Stable kind name, matching the serialized `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "DatabaseError",
            AppError::NotFound(_) => "NotFound",
            AppError::Unauthenticated(_) => "Unauthenticated",
            AppError::IntegrityConflict(_) => "IntegrityConflict",
            AppError::ValidationError(_) => "ValidationError",
            AppError::InternalError(_) => "InternalError",
            AppError::ServiceUnavailable(_) => "ServiceUnavailable",
        }
    }

    /// JSON body a transport can hand back to the caller
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
