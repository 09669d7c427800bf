//! # Configuration System
//!
//! Hierarchical TOML configuration for the jobrun agent.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.jobrun/config.toml` (global user preferences)
//! 3. **Project config** - `./.jobrun/config.toml` (project-specific overrides)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.jobrun/config.toml
//! [labels]
//! namespace = "org.example.pipelines"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use jobrun_core::config::JobrunConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = JobrunConfig::load_hierarchy()?;
//!     let labels = jobrun_core::job::Labels::from_config(&config);
//!     Ok(())
//! }
//! ```

pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{JobrunConfig, LabelConfig};
pub use validation::validate_config;

impl JobrunConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
