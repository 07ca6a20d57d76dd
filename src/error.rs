// error.rs
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Enter an idea to generate an image")]
    EmptyIdea,
    #[error("Model '{0}' is not one of the configured models")]
    UnknownModel(String),
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned {status}: {body}")]
    Upstream {
        endpoint: String,
        status: u16,
        body: String,
    },
    #[error("Unexpected response from {endpoint}: {detail}")]
    MalformedResponse { endpoint: String, detail: String },
}

impl GenerationError {
    pub fn malformed(endpoint: impl Into<String>, detail: impl Into<String>) -> Self {
        GenerationError::MalformedResponse {
            endpoint: endpoint.into(),
            detail: detail.into(),
        }
    }

    /// Short machine-readable tag used in JSON error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::EmptyIdea => "empty_idea",
            GenerationError::UnknownModel(_) => "unknown_model",
            GenerationError::Transport { .. } => "transport",
            GenerationError::Upstream { .. } => "upstream",
            GenerationError::MalformedResponse { .. } => "malformed_response",
        }
    }
}

impl ResponseError for GenerationError {
    fn status_code(&self) -> StatusCode {
        match self {
            GenerationError::EmptyIdea | GenerationError::UnknownModel(_) => StatusCode::BAD_REQUEST,
            GenerationError::Transport { .. }
            | GenerationError::Upstream { .. }
            | GenerationError::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.kind(),
            "detail": self.to_string(),
        }))
    }
}
