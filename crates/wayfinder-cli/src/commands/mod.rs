//! Subcommand handlers.
//!
//! `main.rs` builds the [`QueryService`] once with [`load_service`] and
//! passes it to the handler for the selected subcommand.

mod locations;
mod path;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use wayfinder_lib::{QueryService, Topology};

pub use locations::{handle_connections, handle_info, handle_locations};
pub use path::handle_path;

/// Build the query service from `--topology`, or the built-in hospital
/// layout when no file is given.
pub fn load_service(topology: Option<&Path>) -> Result<QueryService> {
    let topology = match topology {
        Some(path) => Topology::from_path(path)
            .with_context(|| format!("failed to load topology from {}", path.display()))?,
        None => Topology::hospital(),
    };

    let service = QueryService::from_topology(&topology).context("invalid facility topology")?;
    debug!(
        locations = service.location_count(),
        corridors = service.graph().edge_count(),
        "facility graph ready"
    );
    Ok(service)
}
