use thiserror::Error;

use crate::model::domain::Domain;

pub mod dataset;
pub mod pools;
pub mod reader;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },
    #[error("duplicate {domain} entry for raw sum {index} at row {row}")]
    DuplicateIndex {
        domain: Domain,
        index: u32,
        row: usize,
    },
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
