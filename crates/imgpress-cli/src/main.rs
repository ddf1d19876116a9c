mod client;
mod commands;
mod settings;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "imgpress", about = "Compress images and browse the results by component count")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (TOML). Defaults to ./imgpress.toml when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Session name; overrides IMGPRESS_SESSION and the config file
    #[arg(long, global = true)]
    session: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List compression methods and their component limits
    Methods,
    /// Show which component count survives a method switch
    Switch(commands::switch::SwitchArgs),
    /// Upload an image and store the compression result in the session
    Compress(commands::compress::CompressArgs),
    /// Show the session result and the selected level
    Show,
    /// List every level of the session result
    Levels,
    /// Select a level of the session result
    Select(commands::select::SelectArgs),
    /// Write reconstructed levels to disk as PNG
    Export(commands::export::ExportArgs),
    /// Drop the session result
    Clear,
    /// Check that the compression server is reachable
    Health,
    /// Print or save the default configuration as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = || settings::load_config(cli.config.as_deref(), cli.session.as_deref());

    match &cli.command {
        Commands::Methods => commands::methods::run(),
        Commands::Switch(args) => commands::switch::run(args, &config()?),
        Commands::Compress(args) => commands::compress::run(args, &config()?),
        Commands::Show => commands::show::run(&config()?),
        Commands::Levels => commands::levels::run(&config()?),
        Commands::Select(args) => commands::select::run(args, &config()?),
        Commands::Export(args) => commands::export::run(args, &config()?),
        Commands::Clear => commands::clear::run(&config()?),
        Commands::Health => commands::health::run(&config()?),
        Commands::Config(args) => commands::config::run(args),
    }
}
