use lab_service::prelude::*;
use students_api::{default_config, router, SERVICE_NAME};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_with(SERVICE_NAME, default_config())
        .context("failed to load students-api configuration")?;
    init_tracing(&config)?;
    info!(port = config.service.port, "Starting student directory");

    let app = router(AppState::new(config.clone()).with_version(env!("CARGO_PKG_VERSION")));
    Server::new(config).serve(app).await?;
    Ok(())
}
