//! # Configuration Management Module
//!
//! ## Purpose
//! Centralized configuration management for the incident analysis service,
//! supporting configuration files and environment variables with validation
//! and type-safe access to all system settings.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration files (TOML), environment variables
//! - **Output**: Validated configuration structs with defaults and overrides
//! - **Validation**: Type checking, range validation
//!
//! ## Configuration Sources (in order of precedence)
//! 1. Environment variables (highest priority)
//! 2. Configuration files
//! 3. Default values (lowest priority)
//!
//! ## Usage
//! ```rust,no_run
//! use legalassist_analysis::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Server port: {}", config.server.port);
//! ```

use crate::errors::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure containing all system settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server and API configuration
    pub server: ServerConfig,
    /// Analysis boundary settings
    pub analysis: AnalysisConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server and API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Maximum request payload size in MB
    pub max_payload_size_mb: u32,
    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
    /// Enable CORS
    pub enable_cors: bool,
    /// Number of HTTP worker threads
    pub workers: usize,
}

/// Analysis boundary configuration
///
/// These limits apply at the API boundary only; the engine itself accepts
/// any non-blank description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum description length in characters accepted by the API
    pub max_description_length: usize,
    /// Maximum number of phrase suggestions returned per query
    pub max_suggestions: usize,
}

/// Logging and monitoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log file path (optional, logs to stdout if not specified)
    pub file_path: Option<PathBuf>,
    /// Enable structured JSON logging
    pub json_format: bool,
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::from_file("config.toml")
    }

    /// Load configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Configuration file not found: {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| AnalysisError::Config {
            message: format!("Failed to read config file {:?}: {}", path, e),
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| AnalysisError::Config {
            message: format!("Failed to parse config file {:?}: {}", path, e),
        })?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("LEGALASSIST_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("LEGALASSIST_PORT") {
            self.server.port = port.parse().map_err(|_| AnalysisError::Config {
                message: "Invalid port number in LEGALASSIST_PORT".to_string(),
            })?;
        }
        if let Ok(level) = std::env::var("LEGALASSIST_LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AnalysisError::ValidationFailed {
                field: "server.port".to_string(),
                reason: "Port cannot be zero".to_string(),
            });
        }

        if self.server.workers == 0 {
            return Err(AnalysisError::ValidationFailed {
                field: "server.workers".to_string(),
                reason: "Worker count must be greater than zero".to_string(),
            });
        }

        if self.analysis.max_description_length == 0 {
            return Err(AnalysisError::ValidationFailed {
                field: "analysis.max_description_length".to_string(),
                reason: "Maximum description length must be greater than zero".to_string(),
            });
        }

        if self.analysis.max_suggestions == 0 {
            return Err(AnalysisError::ValidationFailed {
                field: "analysis.max_suggestions".to_string(),
                reason: "Suggestion limit must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Get configuration as TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AnalysisError::Config {
            message: format!("Failed to serialize config to TOML: {}", e),
        })
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                max_payload_size_mb: 2,
                request_timeout_seconds: 30,
                enable_cors: true,
                workers: num_cpus::get(),
            },
            analysis: AnalysisConfig {
                max_description_length: 20_000,
                max_suggestions: 5,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                json_format: false,
            },
        }
    }
}
