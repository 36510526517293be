//! Output formatting for query results.
//!
//! Text renderers write to any [`Write`] so they can be exercised without a
//! terminal; JSON output reuses the library's serde representations.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use wayfinder_lib::{Connections, GraphInfo, LocationSummary, PathResult};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON with camelCase fields.
    Json,
}

/// Format a distance in meters, dropping the fraction when it is zero.
pub fn format_distance(meters: f64) -> String {
    if meters.fract() == 0.0 {
        format!("{:.0} m", meters)
    } else {
        format!("{:.2} m", meters)
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Render a path query result.
///
/// `start` and `end` are the normalized identifiers the caller asked for and
/// are only used when the locations are not connected.
pub fn render_path<W: Write>(
    out: &mut W,
    start: &str,
    end: &str,
    result: &PathResult,
    palette: &ColorPalette,
) -> io::Result<()> {
    let p = palette;

    if !result.valid {
        return writeln!(
            out,
            "{}No path found between {} and {}.{}",
            p.yellow, start, end, p.reset
        );
    }

    if result.path.len() == 1 {
        return writeln!(
            out,
            "Already at {}{}{} {}({}){}",
            p.white_bold, result.path_names[0], p.reset, p.gray, result.path[0], p.reset
        );
    }

    let first = result.path_names.first().map(String::as_str).unwrap_or(start);
    let last = result.path_names.last().map(String::as_str).unwrap_or(end);
    writeln!(
        out,
        "Path from {} to {} ({} stops):",
        first,
        last,
        result.path.len()
    )?;

    for (index, (id, name)) in result.path.iter().zip(&result.path_names).enumerate() {
        writeln!(
            out,
            "  {:>2}. {}{}{} {}({}){}",
            index + 1,
            p.white_bold,
            name,
            p.reset,
            p.gray,
            id,
            p.reset
        )?;
    }

    writeln!(
        out,
        "\nTotal distance: {}{}{}",
        p.green,
        format_distance(result.distance),
        p.reset
    )?;
    writeln!(
        out,
        "Estimated walking time: {}{} min{}",
        p.cyan, result.estimated_time_minutes, p.reset
    )
}

fn render_location_row<W: Write>(
    out: &mut W,
    location: &LocationSummary,
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "  {}{:<6}{} {} {}{}{}",
        palette.gray,
        location.id,
        palette.reset,
        location.icon,
        palette.white_bold,
        location.name,
        palette.reset
    )
}

pub fn render_locations<W: Write>(
    out: &mut W,
    locations: &[LocationSummary],
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(out, "{} locations:", locations.len())?;
    for location in locations {
        render_location_row(out, location, palette)?;
    }
    Ok(())
}

pub fn render_connections<W: Write>(
    out: &mut W,
    connections: &Connections,
    palette: &ColorPalette,
) -> io::Result<()> {
    let p = palette;
    let noun = if connections.total_connections == 1 {
        "connection"
    } else {
        "connections"
    };
    writeln!(
        out,
        "{}{}{} {}({}){} has {} {}:",
        p.white_bold,
        connections.location_name,
        p.reset,
        p.gray,
        connections.location,
        p.reset,
        connections.total_connections,
        noun
    )?;
    for connection in &connections.connections {
        writeln!(
            out,
            "  {}{:<6}{} {} {:<24} {}{}{}",
            p.gray,
            connection.id,
            p.reset,
            connection.icon,
            connection.name,
            p.green,
            format_distance(connection.distance),
            p.reset
        )?;
    }
    Ok(())
}

pub fn render_info<W: Write>(
    out: &mut W,
    info: &GraphInfo,
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(out, "Locations: {}", info.total_locations)?;
    writeln!(out, "Corridors: {}", info.total_connections)?;
    writeln!(out)?;
    for location in &info.locations {
        render_location_row(out, location, palette)?;
    }
    Ok(())
}
