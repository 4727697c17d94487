/// Cadenza - track queue shell
use anyhow::Context;
use cadenza_cli::{command::parse_line, config::AppConfig, format_snapshot, Reply, Session};
use cadenza_core::QueuePersistence;
use cadenza_queue::QueueState;
use cadenza_storage::{RedbStore, TrackListStore};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadenza")]
#[command(about = "Cadenza music player track queue", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Data directory, overrides the configuration
    #[arg(long, global = true, env = "CADENZA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Edit the queue interactively
    Shell,
    /// Print the persisted queue
    Show,
    /// Delete the persisted queue
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Data directory: {}", config.storage.data_dir.display());

    match cli.command {
        Commands::Shell => shell(&config).await?,
        Commands::Show => show(&config)?,
        Commands::Reset => reset(&config)?,
    }

    Ok(())
}

async fn shell(config: &AppConfig) -> anyhow::Result<()> {
    let session = Session::open(config).context("Failed to open queue session")?;
    println!("{}", format_snapshot(&session.queue().snapshot()));
    println!("type `help` for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                // help goes to stdout, usage errors to stderr
                e.print().context("Failed to print command help")?;
                continue;
            }
        };
        match session.execute(command).await {
            Ok(Reply::Done) => {}
            Ok(Reply::Text(text)) => println!("{text}"),
            Ok(Reply::Quit) => break,
            Err(e) => eprintln!("{e}"),
        }
    }

    session.close().await;
    Ok(())
}

fn show(config: &AppConfig) -> anyhow::Result<()> {
    let persistence = TrackListStore::new(RedbStore::open(&config.storage.data_dir)?);
    let record = persistence.load()?.unwrap_or_default();

    let state = QueueState {
        list: record.list,
        idx: record.idx,
        backup: None,
    };
    println!("{}", format_snapshot(&(&state).into()));
    Ok(())
}

fn reset(config: &AppConfig) -> anyhow::Result<()> {
    let persistence = TrackListStore::new(RedbStore::open(&config.storage.data_dir)?);
    persistence.clear()?;
    tracing::info!("Persisted queue removed");
    Ok(())
}
