use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing parameters: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Validation error: {0}")]
    InvalidPayload(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// The three outcomes a caller can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Server,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation_error",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Server => "server_error",
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) | Error::MissingFields(_) | Error::InvalidPayload(_) => {
                ErrorKind::Validation
            }
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Config(_) | Error::Database(_) | Error::Migration(_) | Error::Internal(_) => {
                ErrorKind::Server
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let kind = self.kind();
        let message = match &self {
            Error::Validation(msg) | Error::NotFound(msg) => msg.clone(),
            Error::MissingFields(_) => "Missing parameters".to_string(),
            Error::InvalidPayload(err) => err.to_string(),
            Error::Database(err) => {
                tracing::error!(error = ?err, "database error");
                "Error accessing the database".to_string()
            }
            other => {
                tracing::error!(error = %other, "unexpected error");
                "An unexpected error occurred".to_string()
            }
        };

        let mut body = json!({ "error": kind.as_str(), "message": message });
        if let Error::MissingFields(fields) = &self {
            body["missingFields"] = json!(fields);
        }
        (kind.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        let message = match rejection {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
            JsonRejection::JsonSyntaxError(err) => {
                format!("Invalid JSON syntax: {}", err.body_text())
            }
            JsonRejection::MissingJsonContentType(_) => {
                "Expected request with `Content-Type: application/json`".to_string()
            }
            other => format!("Failed to parse JSON body: {}", other.body_text()),
        };
        Error::Validation(message)
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                Error::Validation(format!("Invalid path parameter: {}", err.body_text()))
            }
            other => Error::Internal(other.body_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_becomes_not_found() {
        let err = Error::from(sqlx::Error::RowNotFound);
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn storage_failures_are_server_errors() {
        let err = Error::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.kind().status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_fields_are_listed_in_display() {
        let err = Error::MissingFields(vec!["intervieweeName".into(), "interviewDatetime".into()]);
        assert_eq!(
            err.to_string(),
            "Missing parameters: intervieweeName, interviewDatetime"
        );
        assert_eq!(err.kind().status_code(), StatusCode::BAD_REQUEST);
    }
}
