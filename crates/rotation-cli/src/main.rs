//! rotation CLI
//!
//! Runs one operation against a JSON state file and prints the result as
//! pretty JSON on stdout. Logs go to stderr.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rotation_core::app::{RotationService, RotationServiceBuilder};
use rotation_core::domain::{
    AllianceId, AssignRequest, Event, EventId, Player, PlayerId, RecognitionType,
};
use rotation_core::impls::{InMemoryRotationStore, StaticCatalog, StoreSnapshot, seed_demo};
use rotation_core::ports::{IdGenerator, SystemClock, UlidGenerator};

mod config;

#[derive(Debug, Parser)]
#[command(name = "rotation", about = "MVP rotation scheduler", version)]
struct Cli {
    /// State file (created on first write).
    #[arg(long, env = "ROTATION_STATE", default_value = "rotation-state.json")]
    state: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the demo players and events into the state file.
    SeedDemo,
    AddPlayer {
        #[arg(long)]
        name: String,
        #[arg(long)]
        alliance: Option<AllianceId>,
    },
    SetActive {
        #[arg(long)]
        player: PlayerId,
        #[arg(long, action = clap::ArgAction::Set)]
        active: bool,
    },
    AddEvent {
        #[arg(long)]
        name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },
    /// Active players in rotation order.
    Candidates,
    Status,
    /// The next recommended player.
    Next,
    Assign {
        #[arg(long)]
        event: EventId,
        #[arg(long)]
        player: PlayerId,
        #[arg(long = "type")]
        mvp_type: Option<String>,
    },
    /// Replace an event's existing MVP.
    Reassign {
        #[arg(long)]
        event: EventId,
        #[arg(long)]
        player: PlayerId,
        #[arg(long = "type")]
        mvp_type: Option<String>,
    },
    /// Start a new rotation cycle.
    Reset,
    History {
        #[arg(long)]
        limit: Option<usize>,
    },
    EventLog {
        #[arg(long)]
        event: EventId,
    },
    Stats,
    Types,
}

impl Command {
    fn mutates(&self) -> bool {
        matches!(
            self,
            Command::SeedDemo
                | Command::AddPlayer { .. }
                | Command::SetActive { .. }
                | Command::AddEvent { .. }
                | Command::Assign { .. }
                | Command::Reassign { .. }
                | Command::Reset
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetOutput {
    current_cycle_number: u32,
}

fn load_snapshot(path: &Path) -> Result<StoreSnapshot> {
    if !path.exists() {
        debug!(path = %path.display(), "state file not found, starting empty");
        return Ok(StoreSnapshot::default());
    }
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    StoreSnapshot::from_json(&bytes).with_context(|| format!("invalid state file {}", path.display()))
}

fn save_snapshot(path: &Path, snapshot: &StoreSnapshot) -> Result<()> {
    let json = snapshot.to_json_pretty().context("failed to encode state")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(
    command: Command,
    store: &InMemoryRotationStore,
    service: &RotationService,
    ids: &dyn IdGenerator,
) -> Result<()> {
    match command {
        Command::SeedDemo => {
            seed_demo(store, ids).await;
            print_json(&service.rotation_status().await?)
        }
        Command::AddPlayer { name, alliance } => {
            let mut player = Player::new(ids.generate_player_id(), name);
            player.alliance_id = alliance;
            store.upsert_player(player.clone()).await;
            print_json(&player)
        }
        Command::SetActive { player, active } => {
            store.set_player_active(player, active).await?;
            print_json(&service.rotation_status().await?)
        }
        Command::AddEvent { name, date } => {
            let event = Event::new(ids.generate_event_id(), name, date);
            store.upsert_event(event.clone()).await;
            print_json(&event)
        }
        Command::Candidates => print_json(&service.list_candidates().await?),
        Command::Status => print_json(&service.rotation_status().await?),
        Command::Next => print_json(&service.recommend_next().await?),
        Command::Assign {
            event,
            player,
            mvp_type,
        } => {
            let request = AssignRequest {
                player_id: Some(player),
                mvp_type,
            };
            print_json(&service.assign(event, &request).await?)
        }
        Command::Reassign {
            event,
            player,
            mvp_type,
        } => {
            let request = AssignRequest {
                player_id: Some(player),
                mvp_type,
            };
            print_json(&service.reassign(event, &request).await?)
        }
        Command::Reset => {
            let current_cycle_number = service.reset().await?;
            print_json(&ResetOutput {
                current_cycle_number,
            })
        }
        Command::History { limit } => print_json(&service.history(limit).await?),
        Command::EventLog { event } => print_json(&service.event_log(event).await?),
        Command::Stats => print_json(&service.stats().await?),
        Command::Types => print_json(&service.list_types().await?),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::CliConfig::from_env()?;

    // Initialize tracing (prefer RUST_LOG, fallback to ROTATION_LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut snapshot = load_snapshot(&cli.state)?;
    let types: Vec<RecognitionType> = snapshot
        .recognition_types
        .take()
        .unwrap_or_else(RecognitionType::default_catalog);
    let catalog = StaticCatalog::new(types);
    let custom_catalog = catalog.types().to_vec();

    let store = InMemoryRotationStore::from_snapshot(snapshot);
    let service = RotationServiceBuilder::with_store(Arc::new(store.clone()))
        .catalog(Arc::new(catalog))
        .config(config.rotation.clone())
        .build()
        .await
        .context("failed to build rotation service")?;
    let ids = UlidGenerator::new(SystemClock);

    let mutates = cli.command.mutates();
    run(cli.command, &store, &service, &ids).await?;

    if mutates {
        let mut snapshot = store.snapshot().await;
        if custom_catalog != RecognitionType::default_catalog() {
            snapshot.recognition_types = Some(custom_catalog);
        }
        save_snapshot(&cli.state, &snapshot)?;
        info!(path = %cli.state.display(), "state saved");
    }
    Ok(())
}
