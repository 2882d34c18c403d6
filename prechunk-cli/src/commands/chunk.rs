//! Chunk command implementation

use anyhow::{bail, Result};
use clap::Args;
use prechunk_core::{chunk_text, ChunkConfig};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{collect_text_files, FileReader};
use crate::output::{prepare_output_dir, ChunkWriter};
use crate::progress::ProgressReporter;

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Source directory; all .txt files under it are processed recursively
    #[arg(short, long, value_name = "DIR", required = true)]
    pub source: PathBuf,

    /// Output directory for chunk files (created if absent)
    #[arg(short, long, value_name = "DIR", required = true)]
    pub output: PathBuf,

    /// Maximum characters per chunk
    #[arg(long, value_name = "CHARS", required_unless_present = "config")]
    pub chunk_size: Option<usize>,

    /// Characters shared between consecutive chunks
    #[arg(long, value_name = "CHARS", required_unless_present = "config")]
    pub chunk_overlap: Option<usize>,

    /// Clear the output directory before writing
    #[arg(long)]
    pub overwrite: bool,

    /// Configuration file supplying chunking defaults
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Counts reported at the end of a run
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    /// Documents read and chunked
    pub documents_processed: usize,

    /// Chunk files written
    pub chunks_written: usize,

    /// Unreadable or non-UTF-8 files skipped
    pub files_skipped: usize,
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        // Configuration errors are fatal before any file I/O begins.
        let chunk_config = self.resolve_chunk_config()?;
        log::info!(
            "Chunking with size {} and overlap {} (step {})",
            chunk_config.chunk_size(),
            chunk_config.overlap(),
            chunk_config.step()
        );

        if !self.source.is_dir() {
            bail!(CliError::SourceNotFound(self.source.display().to_string()));
        }

        let files = collect_text_files(&self.source)?;
        log::debug!(
            "Found {} text files under {}",
            files.len(),
            self.source.display()
        );

        prepare_output_dir(&self.output, self.overwrite)?;

        let writer = ChunkWriter::new(&self.source, &self.output);
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(files.len() as u64);

        let mut summary = RunSummary::default();
        for path in &files {
            let name = path.display().to_string();

            let text = match FileReader::read_text(path) {
                Ok(text) => text,
                Err(err) => {
                    log::warn!("Skipping {name}: {err:#}");
                    summary.files_skipped += 1;
                    progress.document_skipped(&name);
                    continue;
                }
            };

            // Write failures are fatal; chunks already on disk stay as-is.
            let chunks = chunk_text(&text, &chunk_config);
            writer.write_chunks(path, &chunks)?;

            summary.documents_processed += 1;
            summary.chunks_written += chunks.len();
            progress.document_completed(&name);
        }
        progress.finish();

        self.report(&summary)
    }

    /// Resolve chunk size and overlap from flags and the optional config file
    fn resolve_chunk_config(&self) -> Result<ChunkConfig> {
        let defaults = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let chunk_size = self.chunk_size.unwrap_or(defaults.chunking.chunk_size);
        let chunk_overlap = self
            .chunk_overlap
            .unwrap_or(defaults.chunking.chunk_overlap);

        ChunkConfig::new(chunk_size, chunk_overlap)
            .map_err(|err| CliError::ConfigError(err.to_string()).into())
    }

    /// Print the run summary to stdout
    fn report(&self, summary: &RunSummary) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(summary)?);
        } else {
            println!("Documents processed: {}", summary.documents_processed);
            println!("Chunks written: {}", summary.chunks_written);
            println!("Files skipped: {}", summary.files_skipped);
        }

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}
