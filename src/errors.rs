use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use miette::Diagnostic;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CardError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(cardgate::io))]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    #[diagnostic(code(cardgate::config))]
    Config(#[from] config::ConfigError),

    #[error("Card directory unavailable: {0}")]
    #[diagnostic(
        code(cardgate::directory),
        help("The card directory backing store did not answer; retry policy belongs to the directory client")
    )]
    DirectoryUnavailable(String),

    #[error("{0}")]
    #[diagnostic(code(cardgate::other))]
    Other(String),
}

impl IntoResponse for CardError {
    fn into_response(self) -> Response {
        // Log the detail; the client gets a generic failure only.
        tracing::error!(error = %self, "request failed with an unexpected fault");
        let body = json!({ "error": "InternalServerError" });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
