//! Task record management for Tarefas.
//!
//! This module implements the task catalogue: creating task records from
//! caller-supplied input, selective field updates, lookup by identifier,
//! listing, and removal. All validation happens before any record is
//! touched, and a single reader-writer lock serialises access to the
//! shared collection. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
