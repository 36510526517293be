//! Handlers for the location listing, connections and info commands.

use std::io::Write;

use anyhow::Result;

use wayfinder_lib::QueryService;

use crate::output::{render_connections, render_info, render_locations, write_json, OutputFormat};
use crate::terminal::ColorPalette;

pub fn handle_locations<W: Write>(
    out: &mut W,
    service: &QueryService,
    format: OutputFormat,
) -> Result<()> {
    let locations = service.list_locations();
    match format {
        OutputFormat::Json => write_json(out, &locations)?,
        OutputFormat::Text => render_locations(out, &locations, &ColorPalette::detect())?,
    }
    Ok(())
}

pub fn handle_connections<W: Write>(
    out: &mut W,
    service: &QueryService,
    location: &str,
    format: OutputFormat,
) -> Result<()> {
    let connections = service.connections(location)?;
    match format {
        OutputFormat::Json => write_json(out, &connections)?,
        OutputFormat::Text => render_connections(out, &connections, &ColorPalette::detect())?,
    }
    Ok(())
}

pub fn handle_info<W: Write>(
    out: &mut W,
    service: &QueryService,
    format: OutputFormat,
) -> Result<()> {
    let info = service.graph_info();
    match format {
        OutputFormat::Json => write_json(out, &info)?,
        OutputFormat::Text => render_info(out, &info, &ColorPalette::detect())?,
    }
    Ok(())
}
