//! Soccer Stats Backend Library
//!
//! Exposes the backend modules for use in tests.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
