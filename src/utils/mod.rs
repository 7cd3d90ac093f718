//! Utility functions and helpers used throughout racedeck

pub mod logging;
