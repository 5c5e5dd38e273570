use anyhow::bail;
use chrono::Duration;

use crate::auth::{generate_jwt, Claims};
use crate::config::{AppConfig, Environment};

pub fn handle(config: &AppConfig, user_id: String, email: Option<String>, hours: i64) -> anyhow::Result<()> {
    if config.environment == Environment::Production {
        bail!("refusing to mint session tokens in production");
    }

    let claims = Claims::new(
        user_id,
        email,
        config.security.jwt_audience.clone(),
        Duration::hours(hours),
    );
    println!("{}", generate_jwt(&claims, &config.security)?);
    Ok(())
}
