//! Configuration module for Sitemap-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, and defines the `ResolveConfig` value that is passed explicitly
//! into the resolution engine.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scout.toml")).unwrap();
//! println!("Resolver will use max depth: {}", config.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    DiscoveryConfig, FilterConfig, ResolveConfig, RetryConfig, ScoringConfig, UrlIdentity,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};

// Re-export validation entry point
pub use validation::validate;
