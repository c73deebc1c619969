//! Worker-record store and task-type catalog capabilities.
//!
//! The matcher never reads these directly; callers take a [`WorkerStore::snapshot`]
//! and hand it over.

pub mod memory;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{MAX_PROFICIENCY, MIN_PROFICIENCY, Worker};

pub use memory::InMemoryWorkerStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("worker not found: {0}")]
    WorkerNotFound(u64),
    #[error("task type not found: {0}")]
    TaskTypeNotFound(String),
    #[error("task type {0} is still assigned to a worker")]
    TaskTypeInUse(String),
    #[error("invalid worker: {0}")]
    Validation(String),
}

/// A worker together with the id the store addresses it by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredWorker {
    pub id: u64,
    #[serde(flatten)]
    pub worker: Worker,
}

pub trait WorkerStore {
    fn list(&self) -> Vec<StoredWorker>;

    fn get(&self, id: u64) -> Result<StoredWorker, StoreError>;

    fn create(&mut self, worker: Worker) -> Result<StoredWorker, StoreError>;

    fn update(&mut self, id: u64, worker: Worker) -> Result<StoredWorker, StoreError>;

    fn delete(&mut self, id: u64) -> Result<StoredWorker, StoreError>;

    /// Owned copy of every worker, in store order, for the matcher.
    fn snapshot(&self) -> Vec<Worker> {
        self.list().into_iter().map(|stored| stored.worker).collect()
    }
}

pub trait TaskTypeCatalog {
    fn task_types(&self) -> Vec<String>;

    fn contains_task_type(&self, name: &str) -> bool;

    /// Returns `false` when the name was already present.
    fn add_task_type(&mut self, name: &str) -> Result<bool, StoreError>;

    fn remove_task_type(&mut self, name: &str) -> Result<(), StoreError>;
}

/// Trim names and check proficiency bounds before a worker is stored.
pub fn normalize_worker(mut worker: Worker) -> Result<Worker, StoreError> {
    let name = worker.name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation("name must not be empty".into()));
    }
    worker.name = name.to_string();

    let mut task_types = std::collections::BTreeMap::new();
    for (task_type, proficiency) in worker.task_types {
        let task_type = normalize_task_type(&task_type)?;
        if !(MIN_PROFICIENCY..=MAX_PROFICIENCY).contains(&proficiency) {
            return Err(StoreError::Validation(format!(
                "proficiency for {task_type} must be between {MIN_PROFICIENCY} and {MAX_PROFICIENCY}, got {proficiency}"
            )));
        }
        if task_types.insert(task_type.clone(), proficiency).is_some() {
            return Err(StoreError::Validation(format!(
                "task type {task_type} is listed more than once"
            )));
        }
    }
    worker.task_types = task_types;

    Ok(worker)
}

pub fn normalize_task_type(name: &str) -> Result<String, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation("task type must not be empty".into()));
    }
    Ok(trimmed.to_string())
}
