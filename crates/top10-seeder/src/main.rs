//! USA Top 10 Seeder - builds and applies the destinations seed script

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use top10_common::logging::{init_logging, LogConfig, LogLevel};
use top10_seeder::{Catalog, Pipeline, SeederConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "top10-seeder")]
#[command(author, version, about = "Seed the USA Top 10 destinations table from Wikipedia")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full pipeline and apply the script to the store
    Run {
        /// Write the script but do not touch the database
        #[arg(long)]
        dry_run: bool,

        /// Seed script output path
        #[arg(long, env = "SEED_SCRIPT_PATH")]
        script: Option<PathBuf>,

        /// SQLite connection URL
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,

        /// Directory for downloaded hero images
        #[arg(long, env = "SEED_IMAGE_DIR")]
        image_dir: Option<PathBuf>,

        #[command(flatten)]
        catalog: CatalogArg,
    },

    /// Print the seed script to stdout; no files or database are written
    Render {
        #[command(flatten)]
        catalog: CatalogArg,
    },

    /// Print the active input list with its editorial defaults
    Catalog {
        #[command(flatten)]
        catalog: CatalogArg,
    },
}

#[derive(Args, Debug)]
struct CatalogArg {
    /// JSON catalog replacing the built-in destination list
    #[arg(long = "catalog", env = "SEED_CATALOG_PATH")]
    path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("top10-seeder")
        .build()
        .merge_env()?;

    let _guard = init_logging(&log_config)?;

    let mut config = SeederConfig::from_env();

    match cli.command {
        Command::Run {
            dry_run,
            script,
            database_url,
            image_dir,
            catalog,
        } => {
            if let Some(script) = script {
                config.script_path = script;
            }
            if let Some(url) = database_url {
                config.database_url = url;
            }
            if let Some(dir) = image_dir {
                config.image_dir = dir;
            }
            if catalog.path.is_some() {
                config.catalog_path = catalog.path;
            }

            let pipeline = if dry_run {
                info!("Dry run: the store will not be touched");
                Pipeline::from_config(&config)?
            } else {
                Pipeline::connect(&config).await?
            };

            let outcome = pipeline.run().await.context("Seeding run failed")?;
            info!(
                records = outcome.records,
                applied = outcome.applied,
                digest = %outcome.digest,
                "Done"
            );
        },
        Command::Render { catalog } => {
            if catalog.path.is_some() {
                config.catalog_path = catalog.path;
            }

            let script = Pipeline::from_config(&config)?.without_images().render().await?;
            println!("{script}");
        },
        Command::Catalog { catalog } => {
            let catalog = match catalog.path.or(config.catalog_path) {
                Some(path) => Catalog::from_path(&path)
                    .with_context(|| format!("Failed to load catalog {}", path.display()))?,
                None => Catalog::builtin(),
            };

            for (index, place) in catalog.places.iter().enumerate() {
                let defaults = catalog.defaults.lookup(place);
                println!(
                    "{:>2}. {} [{}] ({})",
                    index + 1,
                    place,
                    defaults.tags,
                    defaults.best_months
                );
            }
        },
    }

    Ok(())
}
