//! Route handlers, one per route and method.

/// Registration, login and logout
pub mod auth;
/// Expense listing and creation
pub mod expense;
/// Landing page and account view
pub mod general;
/// Guest listing and creation
pub mod guest;
/// Task listing and creation
pub mod task;
/// Vendor listing and creation
pub mod vendor;

#[cfg(test)]
pub(crate) mod test_support;
