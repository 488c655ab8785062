//! Tarefas: in-memory task record store.
//!
//! This crate provides a concurrency-safe store for to-do task records:
//! identifier assignment, field validation, selective updates, and snapshot
//! reads over a single shared collection. It is a library; HTTP routing,
//! JSON endpoint wiring, and server startup belong to the embedding
//! application.
//!
//! # Architecture
//!
//! Tarefas follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, and the store that owns them

pub mod task;
