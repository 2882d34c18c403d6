//! Prechunk CLI library
//!
//! This library provides the command-line interface for splitting a
//! directory of plain-text documents into overlapping fixed-size chunks
//! ahead of knowledge-graph indexing.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
