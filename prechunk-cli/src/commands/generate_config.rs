//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the chunking parameters for your corpus");
        println!("2. Use it for chunking:");
        println!(
            "   prechunk chunk --source <dir> --output <dir> --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        r#"# prechunk configuration

[chunking]
# Maximum characters per chunk. Chunks are measured in characters, not
# bytes, so CJK text chunks to the same widths as ASCII.
chunk_size = 1200

# Characters shared between consecutive chunks of the same document.
# Must be smaller than chunk_size.
chunk_overlap = 100
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("prechunk.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("prechunk.toml"));
    }

    #[test]
    fn test_template_is_loadable() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("prechunk.toml");

        let args = GenerateConfigArgs {
            output: output.clone(),
        };
        args.execute().unwrap();

        let config = CliConfig::from_file(&output).unwrap();
        assert_eq!(config.chunking.chunk_size, 1200);
        assert_eq!(config.chunking.chunk_overlap, 100);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/prechunk.toml"),
        };

        let result = args.execute();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to write to"));
    }
}
