//! Demo driver for the Arbor B+ tree index.
//!
//! Builds a tree from a JSON configuration (or defaults), inserts a
//! deterministic key set in a seeded random order, verifies every lookup,
//! then deletes everything in a second order and reports the round trip.
//!
//! Usage: `arbor-demo [config.json]`, log verbosity via `RUST_LOG`.

use arbor_common::{ArborError, DemoConfig, Result, StringKey};
use arbor_index::BpTree;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arbor_index=info,arbor_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run() {
        tracing::error!("demo failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = load_config()?;
    config.validate()?;
    tracing::info!(
        order = config.order,
        entries = config.entries,
        seed = config.seed,
        "building tree"
    );

    let entries: Vec<(StringKey, u64)> = (0..config.entries)
        .map(|n| (StringKey::nth(n), n as u64 + 1))
        .collect();

    let mut insert_order = entries.clone();
    insert_order.shuffle(&mut StdRng::seed_from_u64(config.seed));
    let mut delete_order = entries.clone();
    delete_order.shuffle(&mut StdRng::seed_from_u64(config.seed.wrapping_add(1)));

    let mut tree = BpTree::new(config.order);
    for (key, val) in insert_order {
        if !tree.insert(key.clone(), val) {
            tracing::warn!(%key, "generated key was not distinct");
        }
    }
    tracing::info!(entries = tree.len(), "insert phase done");

    let mut misses = 0usize;
    for (key, val) in &entries {
        if tree.get(key) != Some(val) {
            tracing::error!(%key, "lookup returned the wrong value");
            misses += 1;
        }
    }
    if misses > 0 {
        return Err(ArborError::Internal(format!(
            "{misses} lookups failed after the insert phase"
        )));
    }
    tracing::info!(entries = tree.len(), "lookup phase done");

    if config.dump_tree {
        println!("{tree}");
    }

    for (key, val) in delete_order {
        match tree.delete(&key) {
            Some(found) if found == val => {}
            other => {
                return Err(ArborError::Internal(format!(
                    "delete of {key} returned {other:?}, expected {val}"
                )));
            }
        }
    }
    tracing::info!(entries = tree.len(), "delete phase done");
    Ok(())
}

fn load_config() -> Result<DemoConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            serde_json::from_str(&text).map_err(|e| ArborError::Config(e.to_string()))
        }
        None => Ok(DemoConfig::default()),
    }
}
