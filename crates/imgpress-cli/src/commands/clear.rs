use anyhow::Result;
use imgpress_core::config::AppConfig;

use crate::settings::open_controller;

pub fn run(config: &AppConfig) -> Result<()> {
    let mut controller = open_controller(config);
    controller.clear();
    println!("Session '{}' cleared", config.session.name);
    Ok(())
}
