//! Output handling module

pub mod chunk_writer;

pub use chunk_writer::{prepare_output_dir, ChunkWriter};
