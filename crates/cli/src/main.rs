//! Demo driver: runs the planner over an ASCII map and prints each call's
//! action chain.
//!
//! The map file uses the planner's symbol vocabulary (`.` walkable, `#`
//! blocked, `W` water, `D` door, `S` stairs, `P` player). Between calls the
//! player is advanced along the issued presses (illegal presses are no-ops,
//! as in the real game), so stuck recovery and phase progression can be
//! watched live:
//!
//! ```text
//! nav-cli --map route.txt --priority "EAST,NORTH,WESTx13" --steps 10
//! ```
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nav_core::{Grid, Move, PhaseConfig, parse_priority_list};
use nav_runtime::{NavSession, load_phase_plan};

#[derive(Parser)]
#[command(name = "nav-cli", about = "Directional navigation planner demo")]
struct Args {
    /// ASCII map file
    #[arg(long)]
    map: PathBuf,

    /// Phase plan JSON file; overrides --priority
    #[arg(long)]
    phases: Option<PathBuf>,

    /// Comma-separated weighted directions for a single-phase run
    #[arg(long, default_value = "NORTH,EAST,WEST,SOUTH")]
    priority: String,

    /// Number of planning calls to simulate
    #[arg(long, default_value_t = 10)]
    steps: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let art = std::fs::read_to_string(&args.map)
        .with_context(|| format!("reading map {}", args.map.display()))?;
    let location_id = args
        .map
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "map".to_string());
    let mut grid = Grid::from_ascii(&art, location_id);

    let phases: Vec<PhaseConfig> = match &args.phases {
        Some(path) => load_phase_plan(path)
            .with_context(|| format!("loading phase plan {}", path.display()))?,
        None => vec![PhaseConfig::new(parse_priority_list(&args.priority)?, u32::MAX)],
    };

    let mut session = NavSession::new(phases);

    for call in 0..args.steps {
        let moves = session.plan(&grid);
        if moves.is_empty() {
            println!("call {call}: no actions (unusable grid)");
            break;
        }
        println!(
            "call {call} [phase {}]: {}",
            session.state().phase_index(),
            format_chain(&moves)
        );
        grid = advance_player(&grid, &moves);
    }

    Ok(())
}

fn format_chain(moves: &[Move]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Walks the player along the issued presses; presses into unwalkable
/// tiles are no-ops, exactly as the game treats them.
fn advance_player(grid: &Grid, moves: &[Move]) -> Grid {
    let Some(origin) = grid.player() else {
        return grid.clone();
    };
    let mut here = origin;
    for press in moves {
        let (dx, drow) = press.delta();
        let next = here.offset(dx, drow);
        // The origin cell holds the player marker but is walkable ground.
        if grid.is_walkable(next) || next == origin {
            here = next;
        }
    }
    grid.with_player_at(here).unwrap_or_else(|| grid.clone())
}
