use serde::{Deserialize, Serialize};

/// Pagination block present on every list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
    pub count: i64,
    pub total: i64,
}

/// Envelope for every list endpoint: a pagination block plus the records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub pagination: Pagination,
    pub data: Vec<T>,
}

/// Error envelope returned by the upstream API on non-success statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

/// Machine-readable upstream error: a code string and a human message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}
