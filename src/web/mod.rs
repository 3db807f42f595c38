//! Web layer - HTTP routes, the session gate, notices and HTML rendering.
//!
//! This module provides the browser-facing interface of the application:
//! one axum handler per route, request extractors that resolve the logged-in
//! user, and the page/redirect responses handlers return.

/// One-shot notices carried across redirects
pub mod flash;
/// Route handlers (auth, general, guests, tasks, vendors, expenses)
pub mod handlers;
/// Page and redirect responses
pub mod outcome;
/// Session cookie handling and authentication extractors
pub mod session;
/// HTML rendering helpers and pages
pub mod views;

use crate::config::server::ServerConfig;
use axum::{Router, routing::get};
use handlers::{auth, expense, general, guest, task, vendor};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared data available to all handlers.
/// Cloned per request; both fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all database operations
    pub db: DatabaseConnection,
    /// Server and session settings
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub const fn new(db: DatabaseConnection, config: Arc<ServerConfig>) -> Self {
        Self { db, config }
    }
}

/// Builds the application router with every route and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(general::home))
        .route("/home", get(general::home))
        .route("/register", get(auth::show_register).post(auth::register))
        .route("/login", get(auth::show_login).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/account", get(general::account))
        .route("/guests", get(guest::list_guests))
        .route("/guest/new", get(guest::show_new_guest).post(guest::create_guest))
        .route("/tasks", get(task::list_tasks))
        .route("/task/new", get(task::show_new_task).post(task::create_task))
        .route("/vendors", get(vendor::list_vendors))
        .route("/vendor/new", get(vendor::show_new_vendor).post(vendor::create_vendor))
        .route("/expenses", get(expense::list_expenses))
        .route("/expense/new", get(expense::show_new_expense).post(expense::create_expense))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
