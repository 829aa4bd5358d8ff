//! head_on — two points driven toward each other along a path graph.
//!
//! Builds the 11-node path `0 — 1 — … — 10` (every edge weight 1), puts one
//! point on node 0 and another on node 9, routes each to the other's start
//! and advances them in lockstep until they collide.  Every recorded event
//! is printed as one JSON line.
//!
//! ```text
//! RUST_LOG=debug cargo run -p head_on
//! ```

use anyhow::{Result, bail};
use env_logger::{Builder, Env};
use log::info;

use gc_continuum::{Continuum, EventLog};
use gc_core::ContinuumConfig;
use gc_graph::generate;
use gc_route::DijkstraRouter;

// ── Constants ─────────────────────────────────────────────────────────────────

const NODES:     usize = 11;
const STRIDE:    f64   = 0.9;
const MAX_TICKS: usize = 50;

/// Fields left out keep their defaults.
const CONFIG_JSON: &str = r#"{ "tolerance": 1e-9 }"#;

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config: ContinuumConfig = serde_json::from_str(CONFIG_JSON)?;
    let graph = generate::path(NODES, 1.0)?.build_neighbor_set();
    let mut continuum = Continuum::with_config(&graph, config)?;

    let west = continuum.add_point(0)?;
    let east = continuum.add_point(9)?;
    let mut west_route = continuum.route_to(west, 9, &DijkstraRouter)?;
    let mut east_route = continuum.route_to(east, 0, &DijkstraRouter)?;
    info!(
        "{west} heads east over {:.1}, {east} heads west over {:.1}",
        west_route.length(),
        east_route.length()
    );

    let mut log = EventLog::new();
    let mut tick = 0;
    let mut collided = false;
    while !collided {
        if tick == MAX_TICKS {
            bail!("no collision after {MAX_TICKS} ticks");
        }
        tick += 1;
        continuum.advance_along_route(west, &mut west_route, STRIDE, &mut log)?;
        continuum.advance_along_route(east, &mut east_route, STRIDE, &mut log)?;
        collided = !log.collisions_of(west).is_empty();
        for event in log.take() {
            println!("{}", serde_json::to_string(&event)?);
        }
        info!(
            "tick {tick}: {west} at {}, {east} at {}",
            continuum.position(west)?,
            continuum.position(east)?
        );
    }

    info!("collision on tick {tick} at {}", continuum.position(west)?);
    Ok(())
}
