use std::path::PathBuf;

use thiserror::Error;

/// Failure to link a person and a movie while building a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("unknown person id: {0}")]
    UnknownPerson(String),
    #[error("unknown movie id: {0}")]
    UnknownMovie(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("bad star row at {}:{line}", path.display())]
    MalformedStar {
        path: PathBuf,
        line: u64,
        #[source]
        source: DatasetError,
    },
}

/// Errors raised by the path search.
///
/// Not finding a path is not an error; see [`crate::search::PathFinder::shortest_path`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `remove` was called on an empty frontier. The search loop guards
    /// against this, so seeing it means the loop invariant was broken.
    #[error("remove called on an empty frontier")]
    EmptyFrontier,
    #[error("person id not found in dataset: {0}")]
    InputNotFound(String),
}
