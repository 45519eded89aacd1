//! Core quire library (config, credentials, API client, wire models).

pub mod api;
pub mod config;
pub mod credentials;
pub mod models;
