//! Built-in seed data and JSON snapshot loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::{Availability, Worker};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Task types and workers used to populate a fresh store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub task_types: Vec<String>,
    #[serde(default)]
    pub workers: Vec<Worker>,
}

pub fn default_task_types() -> Vec<String> {
    ["Translation", "Review", "Marketing", "Design", "Testing"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn default_workers() -> Vec<Worker> {
    vec![
        Worker::new("Alice", Availability::uniform(8))
            .with_task_type("Translation", 5)
            .with_task_type("Review", 4),
        Worker::new("Bob", Availability::uniform(6))
            .with_task_type("Marketing", 5)
            .with_task_type("Review", 5),
        Worker::new("Charlie", Availability::new(7, 0, 0, 0, 7))
            .with_task_type("Design", 5)
            .with_task_type("Translation", 4)
            .with_task_type("Review", 2),
        Worker::new("Diana", Availability::uniform(5))
            .with_task_type("Design", 3)
            .with_task_type("Marketing", 3)
            .with_task_type("Translation", 3)
            .with_task_type("Review", 3),
        Worker::new("Eve", Availability::new(4, 8, 8, 8, 4))
            .with_task_type("Design", 4)
            .with_task_type("Marketing", 4),
    ]
}

pub fn default_snapshot() -> Snapshot {
    Snapshot {
        task_types: default_task_types(),
        workers: default_workers(),
    }
}

/// Read a `{ "task_types": [...], "workers": [...] }` document.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Snapshot, SeedError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: Snapshot = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        workers = snapshot.workers.len(),
        task_types = snapshot.task_types.len(),
        "loaded seed snapshot"
    );
    Ok(snapshot)
}
