use anyhow::Result;
use clap::Args;
use imgpress_core::config::AppConfig;

use crate::settings::open_controller;
use crate::summary::print_level;

#[derive(Args)]
pub struct SelectArgs {
    /// Level index (0 = fewest components)
    pub index: usize,
}

pub fn run(args: &SelectArgs, config: &AppConfig) -> Result<()> {
    let mut controller = open_controller(config);
    controller.select_level(args.index)?;
    if let Some(result) = controller.result() {
        print_level(result, args.index);
    }
    Ok(())
}
