//! Error type shared by the catalog loader, the problem builder and the
//! annealing runner.

use std::path::PathBuf;

/// Errors reported by this crate.
///
/// Length mismatches between a [`Solution`](crate::Solution) and a
/// [`Catalog`](crate::Catalog) are programming errors and panic instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The annealing parameters cannot drive a terminating search.
    #[error("invalid annealing configuration: {0}")]
    InvalidConfig(String),

    /// The catalog or weight cap is malformed.
    #[error("invalid knapsack problem: {0}")]
    InvalidProblem(String),

    /// A search needs at least one item to flip.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// The bounded initialization loop never drew a solution within the cap.
    #[error("no feasible starting solution after {attempts} random draws")]
    InfeasibleStart {
        /// Number of random solutions drawn before giving up.
        attempts: usize,
    },

    /// The catalog file could not be read.
    #[error("failed to read catalog {path:?}")]
    Io {
        /// File that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not a JSON array of items.
    #[error(
        "failed to parse catalog{}",
        .path.as_ref().map(|p| format!(" {p:?}")).unwrap_or_default()
    )]
    Parse {
        /// Source file, or `None` for an in-memory string.
        path: Option<PathBuf>,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
