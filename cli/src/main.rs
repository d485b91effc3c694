use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use astgen::{builtin_schema, load_schema, schema_to_json, Mode, Renderer, Schema};
use astgen_compiler::error::AstGenError;

#[derive(Parser)]
#[command(name = "astgen")]
#[command(about = "Generate C++ AST classes and visitors from a node schema", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the header (`hpp`) or the source file (`cpp`)
    Generate {
        /// Output mode: `hpp`/`declaration` or `cpp`/`definition`
        mode: String,

        /// Header the source file includes, e.g. `ast.hpp` (required for `cpp`)
        #[arg(long)]
        header: Option<String>,

        /// JSON schema file (defaults to the built-in expression/statement schema)
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Output file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the schema as JSON, e.g. as a starting point for a custom schema
    Schema {
        /// JSON schema file (defaults to the built-in schema)
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Output file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), AstGenError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<(), AstGenError> {
    match cli.command {
        Commands::Generate { mode, header, schema, output } => {
            // Mode and header are checked before the schema is even read
            let mode: Mode = mode.parse()?;
            let renderer = Renderer::new(mode, header.as_deref())?;
            let schema = resolve_schema(schema.as_deref())?;
            let text = renderer.generate(&schema)?;
            emit(&text, output.as_deref())
        }

        Commands::Schema { schema, output } => {
            let schema = resolve_schema(schema.as_deref())?;
            let mut json = schema_to_json(&schema)?;
            json.push('\n');
            emit(&json, output.as_deref())
        }
    }
}

fn resolve_schema(path: Option<&Path>) -> Result<Schema, AstGenError> {
    match path {
        Some(path) => {
            tracing::debug!("loading schema from {}", path.display());
            load_schema(path)
        }
        None => Ok(builtin_schema()),
    }
}

/// Writes the whole document in one go, to a file or to stdout.
fn emit(text: &str, output: Option<&Path>) -> Result<(), AstGenError> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            tracing::info!("written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
