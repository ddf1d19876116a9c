use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use imgpress_core::config::AppConfig;
use imgpress_core::error::ImgpressError;
use imgpress_core::export::{export_all, export_level};

use crate::settings::open_controller;
use crate::summary::print_exported;

#[derive(Args)]
pub struct ExportArgs {
    /// Output PNG file, or output directory with --all
    pub path: PathBuf,

    /// Level to export instead of the selected one
    #[arg(long, conflicts_with = "all")]
    pub index: Option<usize>,

    /// Export every level into the output directory
    #[arg(long)]
    pub all: bool,
}

pub fn run(args: &ExportArgs, config: &AppConfig) -> Result<()> {
    let controller = open_controller(config);
    let (Some(result), Some(selected)) = (controller.result(), controller.selected_index()) else {
        return Err(ImgpressError::NotReady.into());
    };

    let exported = if args.all {
        export_all(result, &args.path)
            .with_context(|| format!("Failed to export levels to {}", args.path.display()))?
    } else {
        let index = args.index.unwrap_or(selected);
        let level = result.level(index).ok_or(ImgpressError::LevelOutOfRange {
            index,
            total: result.len(),
        })?;
        vec![export_level(level, &args.path)
            .with_context(|| format!("Failed to export level {index}"))?]
    };

    print_exported(&exported);
    Ok(())
}
