//! DTOs exposed by the directory API endpoints.

use serde::Serialize;

use crate::domain::advocate::Advocate;

/// Query parameters accepted by the `/api/v1/advocates` service.
///
/// Both values arrive as raw strings: page parsing is lenient by contract
/// and must not bounce malformed input back to the caller.
#[derive(Debug, Default)]
pub struct AdvocatesQuery {
    /// Optional free-form search string applied to the roster.
    pub search: Option<String>,
    /// Optional page number for pagination.
    pub page: Option<String>,
}

/// Result payload returned by [`crate::services::api::list_advocates`].
#[derive(Debug)]
pub struct AdvocatesResponse {
    /// Total number of advocates matching the filter.
    pub total: usize,
    /// Page of advocates requested by the caller.
    pub advocates: Vec<Advocate>,
}

/// Success envelope: the page of records plus the echoed status code.
#[derive(Debug, Serialize)]
pub struct AdvocatesEnvelope {
    pub data: Vec<Advocate>,
    pub status: u16,
}

/// Empty-result envelope, served with HTTP 404.
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub message: String,
    pub status: u16,
}

/// Failure envelope, served with HTTP 500. Never carries the cause.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub status: u16,
}
