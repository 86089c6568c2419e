use std::path::PathBuf;

use thiserror::Error;

/// Rejected calculator input. Always detected before any output is produced.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidInputError {
    #[error("eccentricity must be in [0, 1) for a bound orbit, got {0}")]
    Eccentricity(f64),

    #[error("orbital radius must be positive, got {0} km")]
    OrbitalRadius(f64),

    #[error("payload mass must be non-negative, got {0} kg")]
    PayloadMass(f64),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("could not read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: `{value}` is not a number")]
    BadNumber { line: usize, value: String },

    #[error("line {line}: unknown entry kind `{kind}`")]
    UnknownKind { line: usize, kind: String },

    #[error("no {kind} named `{key}` in catalog")]
    UnknownKey { kind: &'static str, key: String },
}
