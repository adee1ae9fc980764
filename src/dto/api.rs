//! Response envelope exchanged with API callers.
//!
//! Every endpoint answers with the same discriminated shape: a success body
//! carrying `data` (plus `pagination` for paginated listings), or a failure
//! body carrying `error` with either a generic message or a list of
//! field-level validation issues. The client hooks rely on that distinction
//! to tell "fix your input" apart from "server unreachable".

use serde::{Deserialize, Serialize};

use crate::pagination::PageMeta;

/// One field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

/// Success envelope for a single payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Success envelope for a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

/// Failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Issues { issues: Vec<ValidationIssue> },
    Message { message: String },
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody::Message {
                message: message.into(),
            },
        }
    }

    pub fn issues(issues: Vec<ValidationIssue>) -> Self {
        Self {
            error: ErrorBody::Issues { issues },
        }
    }
}

/// Either side of the envelope, as the client hooks deserialize it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiReply<T> {
    Failure(ErrorResponse),
    Success(T),
}
