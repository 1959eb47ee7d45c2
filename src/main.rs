//! psstore - Stateless PlayStation Store catalog and product scraper CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use psstore_scraper::commands::{GameCommand, ListCommand};
use psstore_scraper::config::{Config, OutputFormat, Overrides};
use psstore_scraper::store::regions::Region;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "psstore",
    version,
    about = "Stateless PlayStation Store catalog and product scraper",
    long_about = "Lists PlayStation Store catalog pages and looks up game details by concept id."
)]
struct Cli {
    /// Store region (e.g. en, en-us, en-tr) [env: PSSTORE_REGION]
    #[arg(short, long, global = true)]
    region: Option<Region>,

    /// Proxy URL (e.g., socks5://host:port) [env: PSSTORE_PROXY]
    #[arg(long, global = true)]
    proxy: Option<String>,

    /// Request timeout in seconds [env: PSSTORE_TIMEOUT]
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, ignore_case = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of the store catalog
    #[command(alias = "l")]
    List {
        /// Page number (starting at 1)
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Look up games by concept id
    #[command(alias = "g")]
    Game {
        /// Concept id(s) to look up
        #[arg(required = true)]
        concept_ids: Vec<String>,
    },

    /// List supported regions
    Regions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // File, then environment, then flags
    let config = Config::load(cli.config.as_deref())?.with_env()?.with_overrides(Overrides {
        region: cli.region,
        proxy: cli.proxy,
        timeout_secs: cli.timeout,
        format: cli.format,
    });

    match cli.command {
        Commands::List { page } => {
            let output = ListCommand::new(config).execute(page).await?;
            println!("{}", output);
        }

        Commands::Game { concept_ids } => {
            let cmd = GameCommand::new(config);

            let output = if concept_ids.len() == 1 {
                cmd.execute(&concept_ids[0]).await?
            } else {
                cmd.execute_batch(&concept_ids).await?
            };

            println!("{}", output);
        }

        Commands::Regions => {
            println!("Supported store regions:\n");
            println!("{:<8} {:<16} {:<24}", "Code", "Territory", "Browse path");
            println!("{:-<8} {:-<16} {:-<24}", "", "", "");

            for region in Region::all() {
                let path = match region.locale_segment() {
                    Some(locale) => format!("/{}/pages/browse/", locale),
                    None => "/pages/browse/".to_string(),
                };
                println!("{:<8} {:<16} {:<24}", region.to_string(), region.territory(), path);
            }
        }
    }

    Ok(())
}
