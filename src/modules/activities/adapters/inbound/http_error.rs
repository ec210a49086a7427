//! HTTP rendering of [`ApplicationError`].
//!
//! Every failure is answered with a JSON body of the form
//! `{"detail": "<message>"}` so the front end can show it as-is.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::modules::activities::application::errors::ApplicationError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ActivityNotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadySignedUp { .. }
            | Self::CapacityExceeded { .. }
            | Self::NotRegistered { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
