use anyhow::{Context, Result};
use console::Style;
use imgpress_core::config::AppConfig;

use crate::client::HttpCompressionService;

pub fn run(config: &AppConfig) -> Result<()> {
    let service = HttpCompressionService::new(&config.server)?;
    let health = service
        .health()
        .with_context(|| format!("Server {} is not reachable", service.base_url()))?;

    let status = if health.status == "ok" {
        Style::new().green().bold()
    } else {
        Style::new().yellow().bold()
    };
    println!("{}  {}", service.base_url(), status.apply_to(&health.status));
    Ok(())
}
