//! Task record aggregate and related input value types.

use super::{TaskDomainError, TaskId, Title};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
///
/// The serialized labels are the wire vocabulary; no numeric or localized
/// alternative encoding exists at the store boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    #[serde(rename = "A Fazer")]
    Todo,
    /// Work is underway.
    #[serde(rename = "Em Progresso")]
    InProgress,
    /// Work is finished.
    #[serde(rename = "Concluída")]
    Done,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "A Fazer",
            Self::InProgress => "Em Progresso",
            Self::Done => "Concluída",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "A Fazer" => Ok(Self::Todo),
            "Em Progresso" => Ok(Self::InProgress),
            "Concluída" => Ok(Self::Done),
            _ => Err(TaskDomainError::UnknownStatus(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated payload for creating a task record.
///
/// A draft carries a mandatory title and defaults for the remaining
/// fields, so a draft that reaches the store can no longer fail
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: Title,
    description: String,
    status: TaskStatus,
}

impl TaskDraft {
    /// Creates a draft with the required title, an empty description, and
    /// the default status.
    #[must_use]
    pub fn new(title: Title) -> Self {
        Self {
            title,
            description: String::new(),
            status: TaskStatus::default(),
        }
    }

    /// Sets the task description, stored verbatim.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial task status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the draft title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the draft description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the draft status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}

/// Validated set of field overwrites for updating a task record.
///
/// Absent fields mean "leave unchanged". Every present field is already
/// validated, so applying a patch cannot fail part-way through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<Title>,
    description: Option<String>,
    status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the replacement description, stored verbatim.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the replacement title, if any.
    #[must_use]
    pub const fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    /// Returns the replacement description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the replacement status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }
}

/// Task record aggregate root.
///
/// Fields are private; callers observe records only through accessors and
/// always hold copies, never aliases into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: Title,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task record from a validated draft.
    ///
    /// Both timestamps are stamped from the same clock reading, so a fresh
    /// record always satisfies `updated_at == created_at`.
    #[must_use]
    pub fn new(id: TaskId, draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns a new record with each present patch field overwritten and
    /// `updated_at` refreshed.
    ///
    /// The receiver is left untouched; replacing the stored record with
    /// the returned value keeps previously observed copies stable. The
    /// timestamp refreshes even when the patch carries no fields.
    #[must_use]
    pub fn with_patch(&self, patch: &TaskPatch, clock: &impl Clock) -> Self {
        let mut updated = self.clone();
        if let Some(title) = patch.title() {
            updated.title = title.clone();
        }
        if let Some(description) = patch.description() {
            updated.description = description.to_owned();
        }
        if let Some(status) = patch.status() {
            updated.status = status;
        }
        updated.updated_at = clock.utc();
        updated
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
