use std::path::PathBuf;

use loanform_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("missing column {column} in {source_name}")]
    MissingColumn {
        source_name: String,
        column: &'static str,
    },

    #[error("{source_name} line {line}: {message}")]
    InvalidRow {
        source_name: String,
        line: u64,
        message: String,
    },

    #[error("invalid catalog set in {source_name}: {source}")]
    Catalog {
        source_name: String,
        #[source]
        source: ModelError,
    },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
