mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "carteira={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let engine = engine::Engine::builder()
        .clear_transactions_on_update(settings.store.clear_transactions_on_update)
        .build();
    if !settings.store.clear_transactions_on_update {
        tracing::info!("user updates keep existing transactions");
    }

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    server::run_with_listener(engine, listener).await?;
    Ok(())
}
