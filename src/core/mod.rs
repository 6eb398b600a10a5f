//! Configuration and shared request/response types

pub mod config;
pub mod models;
