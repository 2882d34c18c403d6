//! Validated chunking parameters

use crate::error::ChunkError;
use serde::Serialize;

/// Window size and overlap for sliding-window chunking, in characters
///
/// Construction validates the parameters once so that every later chunking
/// call is infallible: `chunk_size > 0` and `overlap < chunk_size`, which
/// guarantees a positive window step. Deserialization is deliberately not
/// derived; external inputs must go through [`ChunkConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkConfig {
    chunk_size: usize,
    overlap: usize,
}

impl ChunkConfig {
    /// Creates a validated configuration
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self, ChunkError> {
        if chunk_size == 0 {
            return Err(ChunkError::ZeroChunkSize);
        }
        if overlap >= chunk_size {
            return Err(ChunkError::OverlapTooLarge {
                overlap,
                chunk_size,
            });
        }

        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Maximum characters per chunk
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Characters shared between consecutive chunks
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Characters the window start advances between chunks
    pub fn step(&self) -> usize {
        self.chunk_size - self.overlap
    }

    /// Number of chunks a document of `char_len` characters produces
    pub fn chunk_count(&self, char_len: usize) -> usize {
        if char_len == 0 {
            0
        } else if char_len <= self.chunk_size {
            1
        } else {
            (char_len - self.overlap).div_ceil(self.step())
        }
    }
}
