use anyhow::Result;
use imgpress_core::browse::BrowsingState;
use imgpress_core::config::AppConfig;

use crate::settings::open_controller;
use crate::summary::{print_idle, print_result_summary};

pub fn run(config: &AppConfig) -> Result<()> {
    let controller = open_controller(config);
    match controller.state() {
        BrowsingState::Ready { result, selected } => print_result_summary(result, *selected, None),
        _ => print_idle(),
    }
    Ok(())
}
