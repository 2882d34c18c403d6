//! Entry point for the prechunk binary

use clap::Parser;
use prechunk_cli::commands::Commands;

/// Pre-indexing text chunker for knowledge-graph RAG corpora
#[derive(Debug, Parser)]
#[command(name = "prechunk", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Chunk(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
