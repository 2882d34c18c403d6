//! CLI command implementations

use clap::Subcommand;

pub mod chunk;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a directory of text files into overlapping chunks
    Chunk(chunk::ChunkArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}
