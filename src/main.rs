use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use discforge::config::ScoringWeights;
use discforge::disc::DiscCatalog;
use discforge::scorer::Scorer;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disc catalog (.csv or .json). Uses the built-in stock discs if omitted.
    #[arg(global = true, short, long)]
    catalog: Option<String>,

    /// JSON file with scoring weights; explicit flags still win.
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Recommend(cmd::recommend::RecommendArgs),
    Path(cmd::path::PathArgs),
    Catalog(cmd::catalog::CatalogArgs),
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    init_logging(cli.debug);

    let catalog = match &cli.catalog {
        Some(path) => DiscCatalog::load_from_file(path),
        None => DiscCatalog::stock(),
    }
    .unwrap_or_else(|e| {
        error!("Failed to load disc catalog: {}", e);
        process::exit(1);
    });

    let (mut config, sub_name) = match &cli.command {
        Commands::Recommend(args) => (args.config.clone(), "recommend"),
        Commands::Path(args) => (args.config.clone(), "path"),
        Commands::Catalog(args) => {
            cmd::catalog::run(args, &catalog);
            return;
        }
    };

    if let Some(path) = &cli.weights {
        info!("⚖️  Loading weights from: {}", path);
        let mut file_weights = ScoringWeights::load_from_file(path).unwrap_or_else(|e| {
            error!("Failed to load weights from {}: {}", path, e);
            process::exit(1);
        });
        // Weights given on the command line override the file.
        match matches.subcommand_matches(sub_name) {
            Some(sub_matches) => file_weights.merge_from_cli(&config.weights, sub_matches),
            None => warn!("No matches for '{}'; ignoring command-line weights", sub_name),
        }
        config.weights = file_weights;
    }

    let scorer = Scorer::new(config).unwrap_or_else(|e| {
        error!("❌ Invalid scoring configuration: {}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Recommend(args) => cmd::recommend::run(args, &catalog, &scorer, cli.debug),
        Commands::Path(args) => cmd::path::run(args, &catalog, &scorer),
        Commands::Catalog(_) => Ok(()),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
