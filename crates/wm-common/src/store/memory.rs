use tracing::info;

use super::{
    StoreError, StoredWorker, TaskTypeCatalog, WorkerStore, normalize_task_type, normalize_worker,
};
use crate::seed::{Snapshot, default_snapshot};
use crate::Worker;

/// Proficiency given to a task type added to a worker without a rating.
pub const DEFAULT_PROFICIENCY: u8 = 1;

/// In-memory worker records plus the task-type catalog they draw from.
///
/// Both live together because edits to a worker's task types keep the
/// catalog in sync.
#[derive(Debug, Default)]
pub struct InMemoryWorkerStore {
    workers: Vec<StoredWorker>,
    task_types: Vec<String>,
    next_id: u64,
}

impl InMemoryWorkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the built-in seed workers and task types.
    pub fn seeded() -> Self {
        Self::from_snapshot(default_snapshot()).expect("built-in seed data should validate")
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for task_type in &snapshot.task_types {
            store.add_task_type(task_type)?;
        }
        for worker in snapshot.workers {
            store.create(worker)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Give a worker `task_type` at the default proficiency and register it in
    /// the catalog. An existing rating is left untouched.
    pub fn add_task_type_to_worker(
        &mut self,
        id: u64,
        task_type: &str,
    ) -> Result<StoredWorker, StoreError> {
        let task_type = normalize_task_type(task_type)?;
        let position = self.position(id)?;

        self.workers[position]
            .worker
            .task_types
            .entry(task_type.clone())
            .or_insert(DEFAULT_PROFICIENCY);
        self.register_task_type(&task_type);

        info!(worker_id = id, %task_type, "task type added to worker");
        Ok(self.workers[position].clone())
    }

    /// Remove `task_type` from a worker. The catalog entry goes too, unless
    /// another worker still holds it.
    pub fn remove_task_type_from_worker(
        &mut self,
        id: u64,
        task_type: &str,
    ) -> Result<StoredWorker, StoreError> {
        let task_type = normalize_task_type(task_type)?;
        let task_type = task_type.as_str();
        let position = self.position(id)?;

        if self.workers[position]
            .worker
            .task_types
            .remove(task_type)
            .is_none()
        {
            return Err(StoreError::TaskTypeNotFound(task_type.to_string()));
        }

        let still_used = self
            .workers
            .iter()
            .any(|stored| stored.id != id && stored.worker.has_task_type(task_type));
        if !still_used {
            self.task_types.retain(|known| known != task_type);
        }

        info!(
            worker_id = id,
            %task_type,
            catalog_pruned = !still_used,
            "task type removed from worker"
        );
        Ok(self.workers[position].clone())
    }

    fn position(&self, id: u64) -> Result<usize, StoreError> {
        self.workers
            .iter()
            .position(|stored| stored.id == id)
            .ok_or(StoreError::WorkerNotFound(id))
    }

    fn register_task_type(&mut self, task_type: &str) -> bool {
        if self.task_types.iter().any(|known| known == task_type) {
            return false;
        }
        self.task_types.push(task_type.to_string());
        true
    }

    fn register_worker_task_types(&mut self, worker: &Worker) {
        for task_type in worker.task_types.keys() {
            self.register_task_type(task_type);
        }
    }
}

impl WorkerStore for InMemoryWorkerStore {
    fn list(&self) -> Vec<StoredWorker> {
        self.workers.clone()
    }

    fn get(&self, id: u64) -> Result<StoredWorker, StoreError> {
        let position = self.position(id)?;
        Ok(self.workers[position].clone())
    }

    fn create(&mut self, worker: Worker) -> Result<StoredWorker, StoreError> {
        let worker = normalize_worker(worker)?;
        self.register_worker_task_types(&worker);

        self.next_id += 1;
        let stored = StoredWorker {
            id: self.next_id,
            worker,
        };
        self.workers.push(stored.clone());

        info!(worker_id = stored.id, name = %stored.worker.name, "worker created");
        Ok(stored)
    }

    fn update(&mut self, id: u64, worker: Worker) -> Result<StoredWorker, StoreError> {
        let position = self.position(id)?;
        let worker = normalize_worker(worker)?;
        self.register_worker_task_types(&worker);

        self.workers[position].worker = worker;

        info!(worker_id = id, "worker updated");
        Ok(self.workers[position].clone())
    }

    fn delete(&mut self, id: u64) -> Result<StoredWorker, StoreError> {
        let position = self.position(id)?;
        let removed = self.workers.remove(position);

        info!(worker_id = id, name = %removed.worker.name, "worker deleted");
        Ok(removed)
    }
}

impl TaskTypeCatalog for InMemoryWorkerStore {
    fn task_types(&self) -> Vec<String> {
        self.task_types.clone()
    }

    fn contains_task_type(&self, name: &str) -> bool {
        self.task_types.iter().any(|known| known == name)
    }

    fn add_task_type(&mut self, name: &str) -> Result<bool, StoreError> {
        let name = normalize_task_type(name)?;
        let added = self.register_task_type(&name);
        if added {
            info!(task_type = %name, "task type registered");
        }
        Ok(added)
    }

    fn remove_task_type(&mut self, name: &str) -> Result<(), StoreError> {
        let name = normalize_task_type(name)?;
        let name = name.as_str();
        if !self.contains_task_type(name) {
            return Err(StoreError::TaskTypeNotFound(name.to_string()));
        }
        if self
            .workers
            .iter()
            .any(|stored| stored.worker.has_task_type(name))
        {
            return Err(StoreError::TaskTypeInUse(name.to_string()));
        }

        self.task_types.retain(|known| known != name);
        info!(task_type = %name, "task type unregistered");
        Ok(())
    }
}
