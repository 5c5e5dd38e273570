use anyhow::Context;

use crate::config::AppConfig;
use crate::database::DatabaseManager;

pub async fn handle(config: AppConfig) -> anyhow::Result<()> {
    let manager = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    manager.migrate().await.context("failed to apply migrations")?;
    manager.close().await;

    println!("Migrations applied");
    Ok(())
}
