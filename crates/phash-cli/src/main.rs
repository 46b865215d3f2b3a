use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use log::{info, LevelFilter};
use phash_core::logging::init_logger;
use phash_core::{HashConfig, PerceptualHasher};

#[derive(Parser)]
#[command(name = "phash")]
#[command(about = "Print the DCT perceptual hash of an image as 16 hex digits")]
#[command(version)]
struct Cli {
    /// Image file to hash
    #[arg(required_unless_present = "generate_config")]
    image: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the default configuration to FILE and exit
    #[arg(long, value_name = "FILE", conflicts_with = "image")]
    generate_config: Option<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    // Parse command line arguments
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        HashConfig::default().save_to_file(&path)?;
        println!("Configuration file generated at: {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(config_path) => HashConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?,
        None => HashConfig::default(),
    };

    // Set log level based on verbosity, never below the configured level
    let verbosity = match cli.verbose {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    init_logger(verbosity.max(config.log_level.into())).map_err(|e| anyhow!("{}", e))?;

    let image = cli.image.context("No image path given")?;
    let hasher = PerceptualHasher::new(&config)?;

    info!("Hashing {}", image.display());
    let hash = hasher
        .hash_file(&image)
        .with_context(|| format!("Failed to hash {}", image.display()))?;

    println!("{}", hash);
    Ok(())
}
