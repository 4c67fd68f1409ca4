use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};
use engine::EngineError;

use api_types::ErrorResponse;
pub use server::{ServerState, router, run_with_listener};

mod server;
mod transactions;
mod user;

pub mod types {
    pub mod user {
        pub use api_types::user::{UserNew, UserResponse, UserUpdate, UserView, UsersResponse};
    }

    pub mod transaction {
        pub use api_types::transaction::{
            TransactionKind, TransactionListResponse, TransactionNew, TransactionResponse,
            TransactionUpdate, TransactionView,
        };
    }
}

/// Message sent back when the request itself could not be read.
const INVALID_REQUEST: &str = "Dados inválidos";

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    /// Body could not be extracted.
    Rejection(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        // Kept for compatibility with existing clients.
        EngineError::InvalidType(_) => StatusCode::UNAUTHORIZED,
        EngineError::UserNotFound(_) | EngineError::TransactionNotFound(_) => {
            StatusCode::NOT_FOUND
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, mensagem) = match self {
            ServerError::Engine(err) => {
                tracing::warn!("request rejected: {err:?}");
                (status_for_engine_error(&err), err.to_string())
            }
            ServerError::Rejection(detail) => {
                tracing::warn!("malformed request: {detail}");
                (StatusCode::BAD_REQUEST, INVALID_REQUEST.to_string())
            }
        };

        (status, Json(ErrorResponse { mensagem })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Rejection(value.body_text())
    }
}
