use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the wayfinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when one or more location identifiers are not registered in the graph.
    #[error("{}", format_unknown(.ids, .valid, .suggestions))]
    UnknownLocation {
        ids: Vec<String>,
        valid: Vec<String>,
        suggestions: Vec<String>,
    },

    /// Raised when a location identifier is blank or contains illegal characters.
    #[error("malformed location identifier '{raw}'")]
    MalformedLocation { raw: String },

    /// Raised when an edge would connect a location to itself.
    #[error("corridor from {id} to itself is not allowed")]
    SelfLoop { id: String },

    /// Raised when a corridor weight is below zero.
    #[error("corridor {from} <-> {to} has negative distance {distance}")]
    NegativeWeight {
        from: String,
        to: String,
        distance: f64,
    },

    /// Raised when a corridor weight is NaN or infinite.
    #[error("corridor {from} <-> {to} has non-finite distance {distance}")]
    InvalidWeight {
        from: String,
        to: String,
        distance: f64,
    },

    /// Raised when a corridor pushes the summed corridor length past the f64 range.
    #[error("corridor {from} <-> {to} makes the total corridor length overflow")]
    DistanceOverflow { from: String, to: String },

    /// Raised when the topology lists a corridor to a location that was never declared.
    #[error("corridor {from} <-> {to} references unregistered location {missing}")]
    UnregisteredEndpoint {
        from: String,
        to: String,
        missing: String,
    },

    /// Raised when a topology declares no locations at all.
    #[error("topology does not declare any locations")]
    EmptyTopology,

    /// Raised when a topology file cannot be parsed.
    #[error("failed to parse topology from {}: {message}", .path.display())]
    TopologyParse { path: PathBuf, message: String },

    /// Raised when topology JSON text cannot be parsed.
    #[error("failed to parse topology: {message}")]
    TopologyJson { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// `true` for errors caused by caller-supplied identifiers rather than
    /// by the loaded topology.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownLocation { .. } | Error::MalformedLocation { .. }
        )
    }
}

fn format_unknown(ids: &[String], valid: &[String], suggestions: &[String]) -> String {
    let noun = if ids.len() == 1 {
        "location"
    } else {
        "locations"
    };
    let mut message = format!("unknown {}: {}", noun, ids.join(", "));
    message.push_str(&format_suggestions(suggestions));
    if !valid.is_empty() {
        message.push_str(&format!(". Available locations: {}", valid.join(", ")));
    }
    message
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
