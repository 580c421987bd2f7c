//! MedInventory
//!
//! Main entry point for the MedInventory dashboard server.

use std::path::PathBuf;

use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use medinventory::api;
use medinventory::config::{self, Config, LogFormat};
use medinventory::db::Database;
use medinventory::state::AppState;

#[derive(Parser)]
#[command(name = "medinventory", about = "Medical supplies inventory dashboard")]
struct Cli {
    /// Configuration file layered over the built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server (default)
    Serve,
    /// Print one table's data as JSON
    Export {
        #[arg(value_enum)]
        table: ExportTable,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportTable {
    Inventory,
    Orders,
    Predictions,
    Hospitals,
}

fn init_logging(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    match config.log.format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

fn open_database(config: &Config) -> Result<Database> {
    let db = match &config.data.sample_path {
        Some(path) => Database::load(path)?,
        None => Database::seeded()?,
    };
    Ok(db)
}

fn export(db: &Database, table: ExportTable) -> Result<()> {
    let json = match table {
        ExportTable::Inventory => serde_json::to_string_pretty(db.inventory())?,
        ExportTable::Orders => serde_json::to_string_pretty(&db.orders().snapshot())?,
        ExportTable::Predictions => serde_json::to_string_pretty(db.predictions())?,
        ExportTable::Hospitals => serde_json::to_string_pretty(db.hospitals())?,
    };
    println!("{}", json);
    Ok(())
}

async fn serve(config: Config, db: Database) -> Result<()> {
    let bind = (config.server.host.clone(), config.server.port);
    let static_dir = config.server.static_dir.clone();
    let state = web::Data::new(AppState::new(db, config));

    info!(host = %bind.0, port = bind.1, "Starting MedInventory");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .configure(api::configure)
            .service(api::routes::static_files(&static_dir))
    })
    .bind(bind)
    .context("Failed to bind server address")?
    .run()
    .await?;

    Ok(())
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = config::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config);

    let db = open_database(&config).context("Failed to load sample data")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config, db).await,
        Commands::Export { table } => export(&db, table),
    }
}
