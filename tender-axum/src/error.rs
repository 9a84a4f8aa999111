//! The error envelope returned by every refusal.

use aide::OperationOutput;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{Level, event};

/// One reason a request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorDetail {
    /// Which part of the request is at fault (`body`, `url`, `header`)
    pub location: String,
    /// The offending field or object
    pub name: String,
    /// A human-readable explanation
    pub description: String,
}

/// The body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
    /// Always `"error"`
    pub status: String,
    /// The reasons, most relevant first
    pub errors: Vec<ErrorDetail>,
}

/// An HTTP status paired with an [`ErrorBody`].
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// Refuse with a single reason.
    pub fn new(
        status: StatusCode,
        location: &str,
        name: &str,
        description: impl Display,
    ) -> Self {
        Self {
            status,
            body: ErrorBody {
                status: "error".to_owned(),
                errors: vec![ErrorDetail {
                    location: location.to_owned(),
                    name: name.to_owned(),
                    description: description.to_string(),
                }],
            },
        }
    }

    /// A guard rejection of the request body.
    pub fn forbidden(name: &str, description: impl Display) -> Self {
        Self::new(StatusCode::FORBIDDEN, "body", name, description)
    }

    /// The caller lacks the permission the route requires.
    pub fn unauthorized() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "header",
            "Authorization",
            "Not authorized",
        )
    }

    /// A path parameter names nothing.
    pub fn not_found(name: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, "url", name, "Not Found")
    }

    /// The bid changed between the guard's read and the merge.
    pub fn conflict() -> Self {
        Self::new(
            StatusCode::CONFLICT,
            "body",
            "data",
            "Bid was changed by another request",
        )
    }

    /// The storage backend failed. The cause is logged, not returned.
    pub fn storage(err: impl Display) -> Self {
        event!(Level::ERROR, err = err.to_string());
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "body",
            "data",
            "Database operation failed",
        )
    }

    /// The response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl OperationOutput for ApiError {
    type Inner = ErrorBody;
}
