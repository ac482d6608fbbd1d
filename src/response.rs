use serde::Serialize;
use utoipa::ToSchema;

/// Pagination details attached to list responses.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub total: Option<i64>,
}

impl Meta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
        }
    }

    /// Meta for an unpaginated list: a single page holding everything.
    pub fn total(total: usize) -> Self {
        let total = total as i64;
        Self {
            page: Some(1),
            per_page: Some(total),
            total: Some(total),
        }
    }

    pub fn empty() -> Self {
        Self {
            page: None,
            per_page: None,
            total: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// Acknowledgement without a payload, e.g. after a delete.
    pub fn done(message: impl Into<String>) -> Self {
        Self::success(message, serde_json::json!({}), Some(Meta::empty()))
    }
}
