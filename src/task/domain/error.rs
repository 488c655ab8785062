//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The status value is outside the allowed vocabulary.
    #[error("unknown task status '{0}', expected 'A Fazer', 'Em Progresso' or 'Concluída'")]
    UnknownStatus(String),
}
