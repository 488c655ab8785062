//! Service layer for task record creation, lookup, update, and removal.

use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskPatch, TaskStatus, Title},
    ports::{TaskStore, TaskStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Raw caller input for creating or updating a task record.
///
/// Each field is independently present-or-absent. On create, an absent
/// title is rejected and absent description/status fall back to their
/// defaults; on update, absent fields are left unchanged. Validation
/// happens inside the service, so the payload itself accepts anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInput {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
}

impl TaskInput {
    /// Creates an input with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title field.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description field.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status field as its wire label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Service-level errors for task catalogue operations.
#[derive(Debug, Error)]
pub enum TaskCatalogError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task catalogue service operations.
pub type TaskCatalogResult<T> = Result<T, TaskCatalogError>;

/// Task catalogue orchestration service.
///
/// Converts raw caller input into validated domain values and drives the
/// store port. Every field of an input is validated before the store is
/// touched, so an update either applies completely or not at all.
pub struct TaskCatalogService<S>
where
    S: TaskStore,
{
    store: Arc<S>,
}

impl<S> TaskCatalogService<S>
where
    S: TaskStore,
{
    /// Creates a new task catalogue service.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns a snapshot of all current tasks, in no guaranteed order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCatalogError::Store`] when the store fails.
    pub async fn list(&self) -> TaskCatalogResult<Vec<Task>> {
        Ok(self.store.list().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCatalogError::Store`] when the store fails.
    pub async fn get(&self, id: &TaskId) -> TaskCatalogResult<Option<Task>> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Creates a new task record.
    ///
    /// Description defaults to empty and status to `A Fazer` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is absent or
    /// empty, and [`TaskDomainError::UnknownStatus`] when a status is
    /// present but outside the allowed vocabulary.
    pub async fn create(&self, input: TaskInput) -> TaskCatalogResult<Task> {
        let mut draft = TaskDraft::new(Title::new(input.title.unwrap_or_default())?);
        if let Some(description) = input.description {
            draft = draft.with_description(description);
        }
        if let Some(status) = input.status {
            draft = draft.with_status(TaskStatus::try_from(status.as_str())?);
        }
        Ok(self.store.insert(draft).await?)
    }

    /// Updates an existing task record, overwriting each present field.
    ///
    /// All present fields are validated before any is applied; a failing
    /// field leaves the stored record entirely unchanged. `updated_at`
    /// refreshes on success even when the input carries no fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::UnknownStatus`] on invalid input, and
    /// [`TaskStoreError::NotFound`] when no task has the identifier.
    pub async fn update(&self, id: &TaskId, input: TaskInput) -> TaskCatalogResult<Task> {
        let mut patch = TaskPatch::new();
        if let Some(title) = input.title {
            patch = patch.with_title(Title::new(title)?);
        }
        if let Some(description) = input.description {
            patch = patch.with_description(description);
        }
        if let Some(status) = input.status {
            patch = patch.with_status(TaskStatus::try_from(status.as_str())?);
        }
        Ok(self.store.apply(id, patch).await?)
    }

    /// Removes a task and reports whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCatalogError::Store`] when the store fails.
    pub async fn delete(&self, id: &TaskId) -> TaskCatalogResult<bool> {
        Ok(self.store.remove(id).await?)
    }
}

impl<S> Clone for TaskCatalogService<S>
where
    S: TaskStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
