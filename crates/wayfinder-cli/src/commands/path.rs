//! Path command handler.

use std::io::Write;

use anyhow::Result;
use tracing::info;

use wayfinder_lib::QueryService;

use crate::output::{render_path, write_json, OutputFormat};
use crate::terminal::ColorPalette;

/// Compute and print the shortest walking path.
///
/// Unknown or malformed identifiers are errors. Unconnected locations are
/// not: they print a notice (or `"valid": false` in JSON).
pub fn handle_path<W: Write>(
    out: &mut W,
    service: &QueryService,
    start: &str,
    end: &str,
    format: OutputFormat,
) -> Result<()> {
    let result = service.find_path(start, end)?;
    info!(
        start = %start.trim(),
        end = %end.trim(),
        valid = result.valid,
        distance = result.distance,
        "path query"
    );

    match format {
        OutputFormat::Json => write_json(out, &result)?,
        OutputFormat::Text => {
            let start = QueryService::normalize(start)?;
            let end = QueryService::normalize(end)?;
            render_path(
                out,
                start.as_str(),
                end.as_str(),
                &result,
                &ColorPalette::detect(),
            )?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_location_is_an_error() {
        let service = QueryService::default_facility().unwrap();
        let mut out = Vec::new();
        let err = handle_path(&mut out, &service, "ZZZ", "ME", OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("unknown location: ZZZ"));
        assert!(out.is_empty());
    }

    #[test]
    fn json_path_output() {
        let service = QueryService::default_facility().unwrap();
        let mut out = Vec::new();
        handle_path(&mut out, &service, "pkg", "lab", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["path"], serde_json::json!(["PKG", "ME", "OPC", "LAB"]));
    }
}
