//! Error responses for the REST API.
//!
//! Every failure surfaces as `{"error": "<message>"}` JSON with the matching
//! status code. The store itself never raises validation errors; the handlers
//! build these from ordinary return values.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// POST without a usable title (absent, or blank after trimming).
    #[error("Le titre est requis")]
    TitleRequired,

    /// PUT with an explicitly supplied title that trims to empty.
    #[error("Le titre ne peut pas être vide")]
    TitleEmpty,

    /// The referenced id has no live record.
    #[error("Tâche non trouvée")]
    TaskNotFound,

    /// Body rejected by the JSON extractor — malformed JSON, wrong
    /// content type, or an unknown status/priority value.
    #[error("Corps de requête invalide")]
    InvalidBody,

    /// No route matched the request.
    #[error("Route non trouvée")]
    RouteNotFound,

    /// Unexpected internal failure. The response never leaks the cause;
    /// it is logged here instead.
    #[error("Erreur serveur interne")]
    Internal(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::TitleRequired | Self::TitleEmpty | Self::InvalidBody => StatusCode::BAD_REQUEST,
            Self::TaskNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref cause) = self {
            error!(err = %cause, "internal error while handling request");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_and_status_codes() {
        assert_eq!(ApiError::TitleRequired.to_string(), "Le titre est requis");
        assert_eq!(
            ApiError::TitleEmpty.to_string(),
            "Le titre ne peut pas être vide"
        );
        assert_eq!(ApiError::TaskNotFound.to_string(), "Tâche non trouvée");
        assert_eq!(ApiError::RouteNotFound.to_string(), "Route non trouvée");

        assert_eq!(ApiError::TitleRequired.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::TaskNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        let internal = ApiError::from(anyhow::anyhow!("boom"));
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.to_string(), "Erreur serveur interne");
    }
}
