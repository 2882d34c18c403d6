//! Recursive text-file discovery using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Collect every `.txt` file under `source`, recursively
///
/// Paths are sorted and deduplicated so the processing order is
/// deterministic regardless of how the filesystem enumerates entries. An
/// empty result is not an error; a source directory with no text files is a
/// valid (if unproductive) run.
pub fn collect_text_files(source: &Path) -> Result<Vec<PathBuf>> {
    let pattern = source.join("**").join("*.txt");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("Source path is not valid UTF-8: {}", source.display()))?;

    let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

    let mut files = Vec::new();
    for path_result in paths {
        let path = path_result.with_context(|| format!("Error walking source: {pattern}"))?;

        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    files.dedup();

    Ok(files)
}
