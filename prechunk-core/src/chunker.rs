//! Sliding-window chunking over character offsets
//!
//! Windows are measured in Unicode scalar values, not bytes, so CJK text
//! chunks to the same widths as ASCII and every slice lands on a valid
//! UTF-8 boundary.

use crate::config::ChunkConfig;
use serde::Serialize;

/// A bounded contiguous slice of one document's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Zero-based sequence index within the source document
    pub index: usize,

    /// Start offset in the source document, in characters
    pub start: usize,

    /// End offset in the source document (exclusive), in characters
    pub end: usize,

    /// The chunk's text content
    pub text: String,
}

impl Chunk {
    /// Returns the chunk length in characters
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

/// Splits `text` into overlapping windows of `config.chunk_size()` characters
///
/// The window start advances by `config.step()` characters per chunk. The
/// final window ends exactly at the document's last character and may be
/// shorter than the configured size. Empty text produces no chunks, and text
/// at or below the chunk size produces exactly one chunk holding the whole
/// document.
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Vec<Chunk> {
    if text.is_empty() {
        return Vec::new();
    }

    // Byte offset of every character boundary, with the end sentinel, so
    // character windows map to string slices without re-scanning.
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = boundaries.len() - 1;

    let mut chunks = Vec::with_capacity(config.chunk_count(char_len));
    let mut start = 0;

    loop {
        let end = (start + config.chunk_size()).min(char_len);
        chunks.push(Chunk {
            index: chunks.len(),
            start,
            end,
            text: text[boundaries[start]..boundaries[end]].to_string(),
        });

        if end == char_len {
            break;
        }
        start += config.step();
    }

    chunks
}
