//! NexaLibrium Library Management System
//!
//! A Rust implementation of the NexaLibrium library management backend,
//! providing a REST JSON API for books, authors, members, loans, and the
//! book-status audit trail.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
