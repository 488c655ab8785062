//! Unit and integration tests for the task module.

mod store_tests;
mod support;
