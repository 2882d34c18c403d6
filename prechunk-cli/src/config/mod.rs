//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,
}

/// Chunking-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Maximum characters per chunk
    pub chunk_size: usize,

    /// Characters shared between consecutive chunks
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        // Upstream GraphRAG's text-unit defaults
        Self {
            chunk_size: 1200,
            chunk_overlap: 100,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
