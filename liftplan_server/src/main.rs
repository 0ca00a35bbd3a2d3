use clap::{Parser, Subcommand};
use liftplan_core::*;
use liftplan_server::AppState;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "liftplan")]
#[command(about = "Workout session recommender", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the catalog CSV path
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(long)]
        port: Option<u16>,

        /// Seed the random source for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate one session from a JSON request file and print it
    Generate {
        /// Path to a generate-workout request body
        #[arg(long)]
        request: PathBuf,

        /// Seed the random source for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show how many catalog exercises each muscle group has
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    liftplan_core::logging::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(path) = cli.catalog {
        config.catalog.path = path;
    }

    match cli.command {
        Some(Commands::Serve { host, port, seed }) => cmd_serve(config, host, port, seed).await,
        Some(Commands::Generate { request, seed }) => cmd_generate(config, &request, seed),
        Some(Commands::Catalog) => cmd_catalog(&config),
        None => cmd_serve(config, None, None, None).await,
    }
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    Catalog::load_from(&config.catalog.path).map_err(|e| {
        tracing::error!("Cannot start without a catalog: {}", e);
        e
    })
}

async fn cmd_serve(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
    seed: Option<u64>,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if seed.is_some() {
        config.training.seed = seed;
    }

    let catalog = Arc::new(load_catalog(&config)?);
    let state = Arc::new(AppState::new(catalog, config.training.clone()));

    liftplan_server::serve(state, &config.server).await
}

fn cmd_generate(config: Config, request_path: &Path, seed: Option<u64>) -> Result<()> {
    let catalog = load_catalog(&config)?;

    let contents = std::fs::read_to_string(request_path)?;
    let request: WorkoutRequest = serde_json::from_str(&contents)?;

    let mut rng = match seed.or(config.training.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let today = config.training.today();
    let session = generate_workout(&catalog, &request, &config.training, today, &mut rng);

    println!("{}", serde_json::to_string_pretty(&session)?);
    Ok(())
}

fn cmd_catalog(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;

    println!("{} exercises in {}", catalog.len(), config.catalog.path.display());
    for (muscle, count) in catalog.muscle_group_counts() {
        println!("  {:<20} {}", muscle, count);
    }

    Ok(())
}
