//! Sliding-window text chunking for pre-indexing document corpora
//!
//! This crate splits a document's text into overlapping fixed-size windows
//! measured in characters, sized for downstream knowledge-graph indexing.
//! Consecutive windows share a configured number of characters so that
//! context spanning a window boundary is preserved in both chunks.
//!
//! Chunking is a pure function of the text and a validated [`ChunkConfig`];
//! all file handling lives in the CLI crate.
//!
//! # Example
//!
//! ```rust
//! use prechunk_core::{chunk_text, ChunkConfig};
//!
//! let config = ChunkConfig::new(800, 400).unwrap();
//! let text = "然".repeat(1000);
//! let chunks = chunk_text(&text, &config);
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[1].start, 400);
//! assert_eq!(chunks[1].end, 1000);
//! ```

pub mod chunker;
pub mod config;
pub mod error;

pub use chunker::{chunk_text, Chunk};
pub use config::ChunkConfig;
pub use error::ChunkError;
