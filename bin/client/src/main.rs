//! XML validation client

mod upload;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "client")]
#[command(about = "XML validation client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an XML file for validation and print the converted document
    Validate {
        /// XML file to validate
        file: PathBuf,
        /// Server URL
        #[arg(short, long, default_value = "http://127.0.0.1:8080")]
        server: String,
    },
    /// Check that the server is up
    Health {
        /// Server URL
        #[arg(short, long, default_value = "http://127.0.0.1:8080")]
        server: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { file, server } => upload::validate_file(&file, &server),
        Commands::Health { server } => upload::check_health(&server),
    }
}
