use anyhow::Result;
use imgpress_core::config::AppConfig;
use imgpress_core::error::ImgpressError;

use crate::settings::open_controller;
use crate::summary::print_levels_table;

pub fn run(config: &AppConfig) -> Result<()> {
    let controller = open_controller(config);
    let (Some(result), Some(selected)) = (controller.result(), controller.selected_index()) else {
        return Err(ImgpressError::NotReady.into());
    };
    print_levels_table(result, selected);
    Ok(())
}
