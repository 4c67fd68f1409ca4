//! User API endpoints

use api_types::user::{UserNew, UserResponse, UserUpdate, UserView, UsersResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use crate::{ServerError, server::ServerState, transactions::transaction_view};

pub(crate) fn user_view(user: &engine::User) -> UserView {
    UserView {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        cpf: user.cpf.clone(),
        age: user.age,
        transactions: user.transactions.iter().map(transaction_view).collect(),
    }
}

fn users_response(engine: &engine::Engine) -> UsersResponse {
    UsersResponse {
        users: engine.users().map(user_view).collect(),
    }
}

/// Handle requests for creating a new user. Answers with the whole store.
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(payload), _): WithRejection<Json<UserNew>, ServerError>,
) -> Result<Json<UsersResponse>, ServerError> {
    let mut engine = state.engine.write().await;
    let id = engine.new_user(engine::UserFields {
        name: payload.name,
        email: payload.email,
        cpf: payload.cpf,
        age: payload.age.and_then(|age| age.to_f64()),
    })?;
    tracing::info!("user {id} created");

    Ok(Json(users_response(&engine)))
}

pub async fn list(State(state): State<ServerState>) -> Json<UsersResponse> {
    let engine = state.engine.read().await;
    Json(users_response(&engine))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<UserView>, ServerError> {
    let engine = state.engine.read().await;
    let user = engine.user(&id)?;
    tracing::debug!("user {id} fetched");

    Ok(Json(user_view(user)))
}

/// Handle requests for updating a user.
///
/// The user's transactions are dropped unless the engine was configured to
/// keep them.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<UserUpdate>, ServerError>,
) -> Result<Json<UserResponse>, ServerError> {
    let mut engine = state.engine.write().await;
    let user = engine.update_user(
        &id,
        engine::UserFields {
            name: payload.name,
            email: payload.email,
            cpf: None,
            age: payload.age.and_then(|age| age.to_f64()),
        },
    )?;
    tracing::info!("user {id} updated");

    Ok(Json(UserResponse {
        user: user_view(user),
    }))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let mut engine = state.engine.write().await;
    let user = engine.delete_user(&id)?;
    tracing::info!(
        "user {id} deleted with {} transactions",
        user.transactions.len()
    );

    Ok(StatusCode::NO_CONTENT)
}
