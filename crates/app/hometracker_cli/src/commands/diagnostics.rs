//! Backend diagnostics.

use hometracker_client::ApiClient;

use crate::Result;

pub async fn health(client: &ApiClient) -> Result<()> {
    let config = client.config();
    println!("api url:     {}", config.api_base_url);
    println!("environment: {}", config.environment);
    println!("server root: {}", config.server_root_url());

    let health = client.health().await?;
    println!("health: {}", serde_json::to_string_pretty(&health)?);

    // Metrics are optional on some deployments.
    match client.metrics().await {
        Ok(metrics) => println!("metrics: {}", serde_json::to_string_pretty(&metrics)?),
        Err(e) => log::warn!("metrics unavailable: {}", e),
    }
    Ok(())
}
