use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use roomplan::collision::colliding_pairs;
use roomplan::config::{ConfigError, EditorConfig};
use roomplan::doc::{FixtureKind, ItemId, PlacedItem};
use roomplan::geometry::{Room, clamp_span};
use roomplan::placement::{Placement, find_free_wall_position};
use roomplan::registry::Registry;
use roomplan::walls::constrain_all_to_room;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("unknown fixture kind `{0}`")]
    UnknownKind(String),
}

#[derive(Parser, Debug)]
#[command(name = "roomplan")]
#[command(about = "Inspect wall snapping, placement, and collisions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find a free wall spot for a new fixture in an empty room.
    Place {
        #[arg(long)]
        kind: String,
        #[arg(long, default_value_t = 300.0)]
        width: f64,
        #[arg(long, default_value_t = 250.0)]
        depth: f64,
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        /// Seed for a reproducible placement.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Re-snap a saved scene to its room and report overlapping items.
    Check { scene: PathBuf },
}

#[derive(Debug, Deserialize)]
struct Scene {
    room: Room,
    #[serde(default)]
    items: Vec<PlacedItem>,
}

#[derive(Debug, Serialize)]
struct PlaceReport {
    kind: FixtureKind,
    scale: f64,
    room: Room,
    #[serde(flatten)]
    placement: Placement,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    room: Room,
    items: Vec<PlacedItem>,
    conflicts: Vec<(ItemId, ItemId)>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = EditorConfig::from_env()?;
    let registry = Registry::builtin();

    match cli.command {
        Command::Place {
            kind,
            width,
            depth,
            scale,
            seed,
        } => {
            let room = Room::new(width, depth);
            run_place(&registry, &config, &kind, room, scale, seed)
        }
        Command::Check { scene } => run_check(&registry, &config, &scene),
    }
}

fn run_place(
    registry: &Registry,
    config: &EditorConfig,
    kind: &str,
    room: Room,
    scale: f64,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let kind = FixtureKind::from_name(kind)
        .ok_or_else(|| CliError::UnknownKind(kind.to_owned()))?;
    let room = room.clamped_to_limits();
    let scale = clamp_span(scale, config.scale_min, config.scale_max);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let placement = find_free_wall_position(
        registry,
        config,
        room,
        kind,
        scale,
        &[],
        config.placement_attempts,
        &mut rng,
    );
    tracing::info!(kind = %kind, wall = placement.snap.wall.name(), "placed");

    let report = PlaceReport {
        kind,
        scale,
        room,
        placement,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_check(registry: &Registry, config: &EditorConfig, path: &Path) -> Result<(), CliError> {
    let raw = fs::read_to_string(path)?;
    let scene: Scene = serde_json::from_str(&raw)?;
    let room = scene.room.clamped_to_limits();

    let items = constrain_all_to_room(registry, config, room, &scene.items);
    let conflicts = colliding_pairs(registry, &items, config.collision_margin);
    if !conflicts.is_empty() {
        tracing::warn!(count = conflicts.len(), "scene has overlapping items");
    }

    let report = CheckReport {
        room,
        items,
        conflicts,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
