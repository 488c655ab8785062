//! In-memory task store guarded by a single reader-writer lock.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskPatch},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// One lock guards both the record mapping and the identifier counter.
/// Reads take the lock shared; mutations take it exclusive. No lock is
/// held across an await point, so hold times stay bounded.
#[derive(Debug)]
pub struct InMemoryTaskStore<C = DefaultClock> {
    state: Arc<RwLock<TaskStoreState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct TaskStoreState {
    tasks: HashMap<TaskId, Task>,
    next_serial: u64,
}

impl TaskStoreState {
    /// Allocates the next identifier. Serials only ever grow, so removed
    /// identifiers are never handed out again.
    fn allocate_id(&mut self) -> TaskId {
        self.next_serial += 1;
        TaskId::new(self.next_serial.to_string())
    }
}

impl InMemoryTaskStore<DefaultClock> {
    /// Creates an empty store stamping timestamps from the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for InMemoryTaskStore<DefaultClock> {
    fn default() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock,
{
    /// Creates an empty store stamping timestamps from the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::default(),
            clock,
        }
    }

    fn read_state(&self) -> TaskStoreResult<RwLockReadGuard<'_, TaskStoreState>> {
        self.state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> TaskStoreResult<RwLockWriteGuard<'_, TaskStoreState>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

impl<C> Clone for InMemoryTaskStore<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

#[async_trait]
impl<C> TaskStore for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.read_state()?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.read_state()?;
        Ok(state.tasks.get(id).cloned())
    }

    async fn insert(&self, draft: TaskDraft) -> TaskStoreResult<Task> {
        let mut state = self.write_state()?;
        let id = state.allocate_id();
        let task = Task::new(id, draft, &*self.clock);
        state.tasks.insert(task.id().clone(), task.clone());
        Ok(task)
    }

    async fn apply(&self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<Task> {
        let mut state = self.write_state()?;
        let updated = state
            .tasks
            .get(id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?
            .with_patch(&patch, &*self.clock);
        state.tasks.insert(id.clone(), updated.clone());
        Ok(updated)
    }

    async fn remove(&self, id: &TaskId) -> TaskStoreResult<bool> {
        let mut state = self.write_state()?;
        Ok(state.tasks.remove(id).is_some())
    }
}
