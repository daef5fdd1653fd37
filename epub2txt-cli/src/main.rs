//! epub2txt CLI - Convert an EPUB e-book into a plain-text file

mod commands;

use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "epub2txt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to EPUB file (required)
    #[arg(short, long, value_name = "PATH")]
    input: Option<String>,

    /// Path to output text file (default: derived from input filename)
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Checked here rather than by clap so a missing input exits with 1
    let Some(input) = cli.input.as_deref() else {
        println!("Error: input file is required");
        println!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    };

    init_tracing(cli.verbose);

    match commands::convert(input, cli.output.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the log subscriber. Logs go to stderr; stdout carries the
/// conversion messages.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "epub2txt_cli=debug,epub2txt_core=debug"
    } else {
        "epub2txt_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
