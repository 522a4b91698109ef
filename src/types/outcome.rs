//! Result envelope returned by every data service operation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Domain-level classification of an operation outcome.
///
/// Mirrors HTTP semantics but is not a wire format; the router decides the
/// actual status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusClass {
    Ok,
    NotFound,
    BadRequest,
    InternalError,
}

impl StatusClass {
    /// HTTP status used when the outcome is written to a response.
    pub fn http_status(self) -> StatusCode {
        match self {
            StatusClass::Ok => StatusCode::OK,
            StatusClass::NotFound => StatusCode::NOT_FOUND,
            StatusClass::BadRequest => StatusCode::BAD_REQUEST,
            StatusClass::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Success/failure envelope carrying a status class, messages and an
/// optional payload.
///
/// A success is always `Ok` with no messages. A failure always has a non-`Ok`
/// status and at least one message; the constructors are the only way to
/// build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    successful: bool,
    status: StatusClass,
    messages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> Outcome<T> {
    /// Successful outcome carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            successful: true,
            status: StatusClass::Ok,
            messages: Vec::new(),
            data: Some(data),
        }
    }

    /// A referenced entity does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure(StatusClass::NotFound, vec![message.into()])
    }

    /// The request was rejected before touching the store.
    pub fn bad_request(messages: Vec<String>) -> Self {
        let messages = if messages.is_empty() {
            vec!["Invalid request.".to_string()]
        } else {
            messages
        };
        Self::failure(StatusClass::BadRequest, messages)
    }

    /// The store failed; `message` must not carry storage details.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::failure(StatusClass::InternalError, vec![message.into()])
    }

    fn failure(status: StatusClass, messages: Vec<String>) -> Self {
        debug_assert!(status != StatusClass::Ok);
        debug_assert!(!messages.is_empty());
        Self {
            successful: false,
            status,
            messages,
            data: None,
        }
    }

    pub fn is_successful(&self) -> bool {
        self.successful
    }

    pub fn status(&self) -> StatusClass {
        self.status
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// `Ok` writes the payload as the body; every other class writes the
/// message list with the matching status code.
impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        match self.status {
            StatusClass::Ok => (StatusCode::OK, Json(self.data)).into_response(),
            status => (status.http_status(), Json(self.messages)).into_response(),
        }
    }
}
