//! Chunking error types (deterministic only)

use thiserror::Error;

/// Configuration errors detected before any chunking takes place
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// Chunk size of zero would produce no forward progress
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,

    /// Overlap at or above chunk size makes the window step non-positive
    #[error("chunk overlap ({overlap}) must be less than chunk size ({chunk_size})")]
    OverlapTooLarge { overlap: usize, chunk_size: usize },
}
