/// Database connection and table creation
pub mod database;

/// HTTP server and session settings from config.toml
pub mod server;
