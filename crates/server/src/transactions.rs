//! Transactions API endpoints

use api_types::{
    transaction::{
        TransactionKind as ApiKind, TransactionListResponse, TransactionNew, TransactionResponse,
        TransactionUpdate, TransactionView,
    },
    user::UserView,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use crate::{ServerError, server::ServerState, user::user_view};

fn map_kind(kind: engine::TransactionKind) -> ApiKind {
    match kind {
        engine::TransactionKind::Income => ApiKind::Income,
        engine::TransactionKind::Outcome => ApiKind::Outcome,
    }
}

pub(crate) fn transaction_view(tx: &engine::Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        title: tx.title.clone(),
        value: tx.value,
        kind: map_kind(tx.kind),
    }
}

fn fields(payload: TransactionNew) -> engine::TransactionFields {
    engine::TransactionFields {
        title: payload.title,
        value: payload.value.and_then(|value| value.to_f64()),
        kind: payload.kind,
    }
}

/// Handle requests for adding a transaction. Answers with the owning user.
pub async fn create(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<TransactionNew>, ServerError>,
) -> Result<Json<UserView>, ServerError> {
    let mut engine = state.engine.write().await;
    let user = engine.new_transaction(&user_id, fields(payload))?;
    if let Some(tx) = user.transactions.last() {
        tracing::info!("transaction {} added to user {user_id}", tx.id);
    }

    Ok(Json(user_view(user)))
}

pub async fn get(
    State(state): State<ServerState>,
    Path((user_id, id)): Path<(String, String)>,
) -> Result<Json<TransactionResponse>, ServerError> {
    let engine = state.engine.read().await;
    let tx = engine.transaction(&user_id, &id)?;
    tracing::debug!("transaction {id} of user {user_id} fetched");

    Ok(Json(TransactionResponse {
        transaction: transaction_view(tx),
    }))
}

/// Handle requests for listing a user's transactions with income, outcome
/// and net totals.
pub async fn list_with_balance(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> Result<Json<TransactionListResponse>, ServerError> {
    let engine = state.engine.read().await;
    let (transactions, balance) = engine.transactions_with_balance(&user_id)?;

    Ok(Json(TransactionListResponse {
        transactions: transactions.iter().map(transaction_view).collect(),
        valor_entrada: balance.total_income,
        valor_retirada: balance.total_outcome,
        total_credito: balance.net(),
    }))
}

pub async fn update(
    State(state): State<ServerState>,
    Path((user_id, id)): Path<(String, String)>,
    WithRejection(Json(payload), _): WithRejection<Json<TransactionUpdate>, ServerError>,
) -> Result<Json<TransactionResponse>, ServerError> {
    let mut engine = state.engine.write().await;
    let tx = engine.update_transaction(&user_id, &id, fields(payload))?;
    tracing::info!("transaction {id} of user {user_id} updated");

    Ok(Json(TransactionResponse {
        transaction: transaction_view(tx),
    }))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path((user_id, id)): Path<(String, String)>,
) -> Result<StatusCode, ServerError> {
    let mut engine = state.engine.write().await;
    engine.delete_transaction(&user_id, &id)?;
    tracing::info!("transaction {id} of user {user_id} deleted");

    Ok(StatusCode::NO_CONTENT)
}
