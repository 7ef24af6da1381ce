use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use log::error;
use serde::Serialize;
use thiserror::Error;

use crate::types::AccountStatus;

/// Every handler failure crosses the HTTP boundary as one of these. Store and
/// hashing errors are converted before they can leak; clients only ever see a
/// JSON body with an `error` field (plus `status` for gated logins).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Account {0}")]
    Gated(AccountStatus),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        ApiError::Conflict(msg.into())
    }

    /// Logs the detail and hands the caller an opaque 500.
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        error!("internal error: {}", detail);
        ApiError::Internal
    }
}

impl From<DieselError> for ApiError {
    fn from(e: DieselError) -> Self {
        match e {
            DieselError::NotFound => ApiError::not_found("Not found"),
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                ApiError::conflict("Email already in use")
            }
            e => ApiError::internal(e),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<AccountStatus>,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidCredentials | ApiError::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden | ApiError::Gated(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = ErrorBody {
            error: self.to_string(),
            status: match self {
                ApiError::Gated(status) => Some(*status),
                _ => None,
            },
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::conflict("dup").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::Gated(AccountStatus::Pending).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::not_found("gone").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_are_stable() {
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(
            ApiError::Gated(AccountStatus::Rejected).to_string(),
            "Account rejected"
        );
        assert_eq!(ApiError::Internal.to_string(), "Internal server error");
    }

    #[test]
    fn unique_violations_become_conflicts() {
        let e = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key".to_string()),
        );
        match ApiError::from(e) {
            ApiError::Conflict(msg) => assert_eq!(msg, "Email already in use"),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[test]
    fn missing_rows_become_not_found() {
        match ApiError::from(DieselError::NotFound) {
            ApiError::NotFound(msg) => assert_eq!(msg, "Not found"),
            other => panic!("expected not found, got {:?}", other),
        }
    }
}
