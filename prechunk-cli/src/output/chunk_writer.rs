//! Chunk file layout and writing

use anyhow::{bail, Context, Result};
use prechunk_core::Chunk;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Prepare the output directory before any chunk is written
///
/// A non-empty output directory is fatal unless `overwrite` is set, in which
/// case prior content is cleared first. Failing up front keeps a partial run
/// from corrupting the results of an earlier one.
pub fn prepare_output_dir(output: &Path, overwrite: bool) -> Result<()> {
    if output.exists() {
        let has_entries = fs::read_dir(output)
            .with_context(|| format!("Failed to read output directory: {}", output.display()))?
            .next()
            .is_some();

        if has_entries {
            if !overwrite {
                bail!(CliError::OutputNotEmpty(output.display().to_string()));
            }
            log::info!("Clearing output directory: {}", output.display());
            fs::remove_dir_all(output).with_context(|| {
                format!("Failed to clear output directory: {}", output.display())
            })?;
        }
    }

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    Ok(())
}

/// Writes chunk files mirroring the source directory structure
pub struct ChunkWriter {
    source_root: PathBuf,
    output_root: PathBuf,
}

impl ChunkWriter {
    /// Create a writer rooted at the given source and output directories
    pub fn new(source_root: &Path, output_root: &Path) -> Self {
        Self {
            source_root: source_root.to_path_buf(),
            output_root: output_root.to_path_buf(),
        }
    }

    /// Write one file per chunk for a single source document
    ///
    /// Files land under the output root at the document's relative parent
    /// path, named `{stem}_chunk_{NNNN}.txt` with a 1-based zero-padded
    /// sequence index so lexicographic order equals chunk order.
    pub fn write_chunks(&self, doc_path: &Path, chunks: &[Chunk]) -> Result<()> {
        let relative = doc_path.strip_prefix(&self.source_root).with_context(|| {
            format!(
                "Document {} is outside the source directory {}",
                doc_path.display(),
                self.source_root.display()
            )
        })?;

        let dest_dir = match relative.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.output_root.join(parent),
            _ => self.output_root.clone(),
        };
        fs::create_dir_all(&dest_dir)
            .with_context(|| format!("Failed to create directory: {}", dest_dir.display()))?;

        let stem = doc_path
            .file_stem()
            .with_context(|| format!("Document has no file name: {}", doc_path.display()))?
            .to_string_lossy();

        for chunk in chunks {
            let dest_file = dest_dir.join(format!("{}_chunk_{:04}.txt", stem, chunk.index + 1));
            fs::write(&dest_file, &chunk.text)
                .with_context(|| format!("Failed to write chunk file: {}", dest_file.display()))?;
        }

        Ok(())
    }
}
