//! Configuration module for Site-Distill
//!
//! Handles loading, parsing, and validating the optional TOML configuration
//! file. Every setting has a default, so the tool also runs with no file at
//! all.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlConfig, HttpConfig, IngestConfig, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::load_config;
