//! Command-line interface for rowgen
//!
//! # Usage Examples
//!
//! ```bash
//! # CSV from flags
//! rowgen generate --format csv --rows 100 --output users \
//!   --field id:ID --field email:EMAIL --field age:AGE:18:30
//!
//! # SQL from a request file, overriding the table name
//! rowgen generate --request users.yaml --format sql --table-name users
//!
//! # Supported field types
//! rowgen field-types
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=rowgen=debug`).

use anyhow::Context;
use clap::{Parser, Subcommand};
use rowgen::{FileSink, GenerateArgs, GenerationService};
use rowgen_core::FieldType;

#[derive(Parser)]
#[command(name = "rowgen")]
#[command(about = "Generate synthetic JSON, CSV and SQL data from field declarations")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a document and print its absolute path
    Generate(GenerateArgs),

    /// List supported field types and whether they take a min/max range
    FieldTypes,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing (stdout is reserved for command output)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            let settings = args
                .into_settings()
                .context("Invalid generation request")?;

            let service = GenerationService::new(FileSink::new(&settings.out_dir))
                .with_options(settings.options);

            let outcome = service.process(&settings.request).with_context(|| {
                format!("Failed to generate {}", settings.request.file_name())
            })?;

            println!("{}", outcome.path.display());
        }
        Commands::FieldTypes => {
            for field_type in FieldType::ALL {
                let range = if field_type.requires_range() {
                    "min/max"
                } else {
                    "-"
                };
                println!("{:<18}{range}", field_type.as_str());
            }
        }
    }

    Ok(())
}
