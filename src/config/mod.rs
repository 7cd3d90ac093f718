//! Configuration management for racedeck

pub mod app_config;

pub use app_config::*;
