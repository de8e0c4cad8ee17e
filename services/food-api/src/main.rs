use food_api::{default_config, router, FoodState, SERVICE_NAME};
use lab_service::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_with(SERVICE_NAME, default_config())
        .context("failed to load food-api configuration")?;
    init_tracing(&config)?;

    info!(data_file = %config.custom.data_file.display(), "Serving food catalog");

    let app = router(FoodState::new(config.clone()));
    Server::new(config).serve(app).await?;

    Ok(())
}
