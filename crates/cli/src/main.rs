mod config;
mod render;
mod repl;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use omdb_client::OmdbClient;
use pipeline::Aggregator;
use session::{Location, SearchOrchestrator, ViewState};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use config::{AppConfig, GlobalArgs, OutputFormat};
use repl::ReplCommand;

/// Movie Search - find movies in OMDb from the terminal
#[derive(Parser)]
#[command(name = "movie-search")]
#[command(about = "Search movies and browse their details", long_about = None, version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search by title (no title: the default selection)
    Search {
        /// Title to search for
        query: Vec<String>,

        /// Location shown alongside the results
        #[arg(long)]
        location: Option<Location>,

        /// Seed for the result order
        #[arg(long)]
        seed: Option<u64>,

        /// Also print the details of result N
        #[arg(long)]
        open: Option<usize>,
    },

    /// Show the full details of one IMDb id
    Show {
        /// IMDb id, e.g. tt4814290
        id: String,
    },

    /// Search repeatedly from a prompt
    Interactive {
        /// Initial location
        #[arg(long)]
        location: Option<Location>,

        /// Seed for the result order
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::try_from(cli.global).context("Invalid configuration")?;

    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = OmdbClient::new(config.omdb.clone()).context("Failed to build OMDb client")?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            query,
            location,
            seed,
            open,
        } => handle_search(client, &config, query.join(" "), location, seed, open).await?,
        Commands::Show { id } => handle_show(client, &config, &id).await?,
        Commands::Interactive { location, seed } => {
            handle_interactive(client, &config, location, seed).await?
        }
    }

    Ok(())
}

fn build_orchestrator(client: OmdbClient, seed: Option<u64>) -> SearchOrchestrator {
    let mut aggregator = Aggregator::new(Arc::new(client));
    if let Some(seed) = seed {
        aggregator = aggregator.with_seed(seed);
    }
    SearchOrchestrator::new(aggregator)
}

/// Handle the 'search' command
async fn handle_search(
    client: OmdbClient,
    config: &AppConfig,
    query: String,
    location: Option<Location>,
    seed: Option<u64>,
    open: Option<usize>,
) -> Result<()> {
    let orchestrator = build_orchestrator(client, seed);
    orchestrator.set_location(location);

    info!("Searching for '{}'", query);
    orchestrator.submit(&query).await;

    if let Some(n) = open {
        if n == 0 || orchestrator.select_index(n - 1).is_none() {
            anyhow::bail!("There is no result number {}", n);
        }
    }

    print_state(&orchestrator.snapshot(), config.format)
}

/// Handle the 'show' command
async fn handle_show(client: OmdbClient, config: &AppConfig, id: &str) -> Result<()> {
    let record = client
        .try_fetch(id)
        .await
        .with_context(|| format!("Failed to fetch details for {}", id))?;

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Table => print!("{}", render::render_details(&record)),
    }
    Ok(())
}

/// Handle the 'interactive' command
async fn handle_interactive(
    client: OmdbClient,
    config: &AppConfig,
    location: Option<Location>,
    seed: Option<u64>,
) -> Result<()> {
    let orchestrator = build_orchestrator(client, seed);
    orchestrator.set_location(location);

    println!("{}", "🎬 Movie Search".bold().blue());
    println!("{}", repl::HELP);

    // Initial load, like opening the page
    orchestrator.load_defaults().await;
    print_state(&orchestrator.snapshot(), config.format)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        match ReplCommand::parse(&line) {
            ReplCommand::Search(text) => {
                orchestrator.submit(&text).await;
                print_state(&orchestrator.snapshot(), config.format)?;
            }
            ReplCommand::Open(index) => {
                if orchestrator.select_index(index).is_some() {
                    print_state(&orchestrator.snapshot(), config.format)?;
                } else {
                    eprintln!("{}", format!("There is no result number {}", index + 1).red());
                }
            }
            ReplCommand::Close => {
                orchestrator.close_details();
                print_state(&orchestrator.snapshot(), config.format)?;
            }
            ReplCommand::SetLocation(location) => {
                orchestrator.set_location(location);
                print_state(&orchestrator.snapshot(), config.format)?;
            }
            ReplCommand::Help => println!("{}", repl::HELP),
            ReplCommand::Quit => break,
            ReplCommand::Invalid(message) => eprintln!("{}", message.red()),
        }
    }

    Ok(())
}

/// Print the grid, followed by the details view when one is open
fn print_state(state: &ViewState, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(state)?);
        }
        OutputFormat::Table => {
            print!("{}", render::render_grid(state));
            if let Some(record) = &state.selected {
                println!();
                print!("{}", render::render_details(record));
            }
        }
    }
    Ok(())
}
