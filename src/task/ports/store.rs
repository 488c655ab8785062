//! Store port for task record ownership, lookup, and mutation sequencing.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task storage contract.
///
/// Implementations are the sole owner of the records they hold: every
/// returned [`Task`] is a copy, and identifier assignment happens inside
/// the store so concurrent callers can never observe a duplicate.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns a snapshot copy of all current tasks, in no guaranteed
    /// order.
    async fn list(&self) -> TaskStoreResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist; absence is not an
    /// error.
    async fn find_by_id(&self, id: &TaskId) -> TaskStoreResult<Option<Task>>;

    /// Stores a new task built from the validated draft.
    ///
    /// Allocates the next identifier and stamps both timestamps from the
    /// store clock. Identifiers are never reused, even after removal.
    async fn insert(&self, draft: TaskDraft) -> TaskStoreResult<Task>;

    /// Replaces the stored record with one carrying the patch applied and
    /// a refreshed `updated_at`, returning a copy of the new record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has the given
    /// identifier.
    async fn apply(&self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<Task>;

    /// Removes the task if present and reports whether it existed.
    ///
    /// Absence is a boolean result, not an error.
    async fn remove(&self, id: &TaskId) -> TaskStoreResult<bool>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a storage-layer error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
