//! Engine configuration
//!
//! The engine reads nothing from the environment; hosts build this
//! struct (or deserialize it from their own settings) and hand it over.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a [`ReasoningEngine`](crate::engine::ReasoningEngine)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Random seed for reproducible phrasing (None = entropy)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid engine config JSON")
    }
}
