//! texctx CLI
//!
//! Inspect the math and code contexts of a document: dump its boundary
//! tokens, resolve the bounds enclosing selections, or classify a cursor.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Once;

use clap::{Parser, Subcommand};
use texctx_ir::{Position, SelectionRange};

mod commands;
mod error;

use commands::{parse_range, Session};
use error::CliError;

#[derive(Parser)]
#[command(name = "texctx", version)]
#[command(about = "Resolve math and code context bounds in a document")]
struct Cli {
    /// JSON command table to use instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    commands: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the boundary tokens of a document
    Tokens {
        /// Document to read (`-` for stdin)
        file: PathBuf,
    },
    /// Print the bounds enclosing each range
    Bounds {
        /// Document to read (`-` for stdin)
        file: PathBuf,
        /// Character offsets of a cursor or selection
        #[arg(long = "range", value_name = "FROM[:TO]", required = true, value_parser = parse_range)]
        ranges: Vec<SelectionRange>,
    },
    /// Print the major context type at a position
    Major {
        /// Document to read (`-` for stdin)
        file: PathBuf,
        /// Character offset of the cursor
        #[arg(long)]
        at: Position,
    },
}

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Enable with `RUST_LOG=texctx_lexer=trace` or `RUST_LOG=debug`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let commands = cli.commands.as_deref();
    match &cli.command {
        Command::Tokens { file } => commands::tokens(&Session::load(file, commands, cli.json)?),
        Command::Bounds { file, ranges } => {
            commands::bounds(&Session::load(file, commands, cli.json)?, ranges)
        }
        Command::Major { file, at } => {
            commands::major(&Session::load(file, commands, cli.json)?, *at)
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            if cli.json {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
