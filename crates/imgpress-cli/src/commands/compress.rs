use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use imgpress_core::browse::{Browser, Resolution};
use imgpress_core::config::AppConfig;
use imgpress_core::method::CompressionMethod;
use tracing::debug;

use crate::client::HttpCompressionService;
use crate::settings::open_store;
use crate::summary::print_result_summary;

#[derive(Args)]
pub struct CompressArgs {
    /// Input image (JPG or PNG)
    pub image: PathBuf,

    /// Compression method (DCT or SVD)
    #[arg(short, long)]
    pub method: Option<CompressionMethod>,

    /// Number of components to retain
    #[arg(short = 'n', long)]
    pub components: Option<u32>,
}

pub fn run(args: &CompressArgs, config: &AppConfig) -> Result<()> {
    let mut form = config.compression.upload_form()?;
    if let Some(method) = args.method {
        let carried = form.set_method(method);
        debug!(%method, components = carried, "Applied method switch");
    }
    if let Some(n) = args.components {
        form.set_components(n)?;
    }
    let request = form
        .build_from_path(&args.image)
        .with_context(|| format!("Cannot upload {}", args.image.display()))?;

    let service = HttpCompressionService::new(&config.server)?;
    let mut browser = Browser::new(service, open_store(config))
        .context("Failed to start compression worker")?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]")?);
    pb.set_message(format!(
        "Compressing {} with {} ({} components)",
        request.file_name, request.method, request.num_components
    ));
    pb.enable_steady_tick(Duration::from_millis(100));

    browser.submit(request);
    let settled = browser.wait();
    pb.finish_and_clear();

    let settled = settled?;
    match settled.resolution {
        Resolution::Ready { selected } => {
            if let Some(result) = browser.controller().result() {
                print_result_summary(result, selected, Some(settled.elapsed));
            }
            Ok(())
        }
        Resolution::Failed(e) => Err(e.into()),
        Resolution::Stale => unreachable!(),
    }
}
