//! # LegalAssist Incident Analysis Engine
//!
//! ## Overview
//! This library turns free-text incident descriptions into structured legal
//! guidance for officers drafting incident reports (FIRs): an incident
//! category, candidate statutory sections, relevant precedent summaries,
//! extracted entities, investigative recommendations, and an overall
//! confidence score.
//!
//! ## Architecture
//! The system is composed of several key modules:
//! - `entities`: Pattern-rule extraction of persons, locations, dates, and offense keywords
//! - `classify`: Ordered keyword rules mapping text to a legal category
//! - `sections`: Static catalog of candidate statutory sections
//! - `precedents`: Static catalog of precedent summaries
//! - `guidance`: Investigative next-step checklists
//! - `analysis`: The analysis engine orchestrating the above
//! - `report`: FIR document drafting
//! - `api`: REST API endpoints
//! - `config`: Configuration management and settings
//! - `errors`: Centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: Incident description (text), incident-type hint (text)
//! - **Output**: Structured analysis result; deterministic except for the
//!   confidence placeholder
//!
//! ## Usage
//! ```rust
//! use legalassist_analysis::AnalysisEngine;
//!
//! let engine = AnalysisEngine::new().unwrap();
//! let result = engine
//!     .analyze("Rajesh Kumar reported a theft at Main Street", "theft")
//!     .unwrap();
//! assert_eq!(result.category.as_str(), "criminal");
//! ```

// Core modules
pub mod analysis;
pub mod classify;
pub mod config;
pub mod entities;
pub mod errors;
pub mod guidance;
pub mod precedents;
pub mod report;
pub mod sections;

// Service modules
pub mod api;

// Utilities
pub mod utils;

// Re-exports for convenience
pub use analysis::{AnalysisEngine, AnalysisResult};
pub use classify::{Category, Classification, OffenseCluster};
pub use config::Config;
pub use entities::EntityBundle;
pub use errors::{AnalysisError, Result};

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Application state shared across API handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Config>,
    pub engine: Arc<analysis::AnalysisEngine>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Build the shared state from a loaded configuration
    pub fn new(config: Arc<config::Config>) -> Result<Self> {
        Ok(Self {
            config,
            engine: Arc::new(analysis::AnalysisEngine::new()?),
            started_at: Utc::now(),
        })
    }
}
