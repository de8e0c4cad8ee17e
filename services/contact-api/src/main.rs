use contact_api::{default_config, router, ContactState, SERVICE_NAME};
use lab_service::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_with(SERVICE_NAME, default_config())
        .context("failed to load contact-api configuration")?;
    init_tracing(&config)?;

    info!(data_dir = %config.custom.data_dir.display(), "Storing submissions");

    let app = router(ContactState::new(config.clone()));
    Server::new(config).serve(app).await?;

    Ok(())
}
