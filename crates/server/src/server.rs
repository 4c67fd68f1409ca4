use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post, put},
};
use tokio::sync::RwLock;

use std::sync::Arc;

use crate::{transactions, user};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<RwLock<Engine>>,
}

/// Log every request with the status it produced.
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;
    tracing::info!("{method} {path} -> {}", response.status());
    response
}

async fn greeting() -> &'static str {
    "Hellouu world"
}

/// Build the application router on top of `engine`.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(RwLock::new(engine)),
    };

    Router::new()
        .route("/user", get(greeting))
        .route("/users", get(user::list).post(user::create))
        .route(
            "/users/{id}",
            get(user::get).put(user::update).delete(user::delete),
        )
        .route("/user/{id}/transactions", post(transactions::create))
        .route(
            "/user/{id}/transactions/{transaction_id}",
            get(transactions::get),
        )
        .route("/users/{id}/transactions", get(transactions::list_with_balance))
        .route(
            "/users/{id}/transactions/{transaction_id}",
            put(transactions::update).delete(transactions::delete),
        )
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Serve on `listener` until Ctrl-C is received.
pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("API listening on {}", addr);

    axum::serve(listener, router(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown requested"),
        Err(err) => {
            tracing::error!("failed to listen for shutdown signal: {err}");
            std::future::pending::<()>().await;
        }
    }
}
