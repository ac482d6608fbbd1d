use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

use crate::response::{ApiResponse, Meta};

/// Field name to the messages raised for it, in the order they were found.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Conflict {0}")]
    Conflict(String),

    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("ORM error")]
    OrmError(DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// A single field-level validation failure.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert(field.to_string(), vec![message.into()]);
        AppError::Validation(fields)
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                return AppError::Conflict("Resource already exists".into());
            }
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                return AppError::Conflict("Resource is referenced by other records".into());
            }
            _ => {}
        }
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => AppError::NotFound,
            other => AppError::OrmError(other),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }
        AppError::Validation(fields)
    }
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::OrmError(err) => {
                tracing::error!(error = %err, "database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = self.to_string();
        let fields = match self {
            AppError::Validation(fields) => Some(fields),
            _ => None,
        };

        let body = ApiResponse {
            message: message.clone(),
            data: Some(ErrorData {
                error: message,
                fields,
            }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn validation_errors_keep_field_messages() {
        let mut errors = ValidationErrors::new();
        let mut err = ValidationError::new("length");
        err.message = Some("Name is required".into());
        errors.add("name", err);

        match AppError::from(errors) {
            AppError::Validation(fields) => {
                assert_eq!(fields["name"], vec!["Name is required".to_string()]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn status_codes_follow_variant() {
        let cases = [
            (AppError::NotFound, StatusCode::NOT_FOUND),
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AppError::Forbidden, StatusCode::FORBIDDEN),
            (AppError::Conflict("dup".into()), StatusCode::CONFLICT),
            (AppError::field("email", "bad"), StatusCode::UNPROCESSABLE_ENTITY),
            (
                AppError::OrmError(DbErr::Custom("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn missing_update_target_is_not_found() {
        assert!(matches!(
            AppError::from(DbErr::RecordNotUpdated),
            AppError::NotFound
        ));
    }
}
