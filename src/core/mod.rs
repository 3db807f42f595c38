//! Core business logic - framework-agnostic persistence and account operations.
//!
//! Every function takes a `DatabaseConnection` and returns the crate `Result`,
//! so the web layer only has to decide what to render.

/// Expense listing and creation
pub mod expense;
/// Guest listing and creation
pub mod guest;
/// Argon2 password hashing
pub mod password;
/// Login session lifecycle
pub mod session;
/// Task listing and creation
pub mod task;
/// Registration, lookups and credential checks
pub mod user;
/// Vendor listing and creation
pub mod vendor;
