use anyhow::Result;
use clap::Args;
use imgpress_core::config::AppConfig;
use imgpress_core::method::CompressionMethod;

#[derive(Args)]
pub struct SwitchArgs {
    /// Method switched away from (DCT or SVD)
    #[arg(long)]
    pub from: CompressionMethod,

    /// Method switched to (DCT or SVD)
    #[arg(long)]
    pub to: CompressionMethod,

    /// Component count selected before the switch
    pub current: u32,
}

pub fn run(args: &SwitchArgs, config: &AppConfig) -> Result<()> {
    let policy = config.compression.policy();
    let resolved = policy.resolve(args.from, args.to, args.current);

    if resolved == args.current {
        println!("{} -> {}: keep {}", args.from, args.to, resolved);
    } else {
        println!(
            "{} -> {}: {} resets to {}",
            args.from, args.to, args.current, resolved
        );
    }
    Ok(())
}
