//! # extract-jsonpaths
//!
//! Prints the JSONPath(s) addressable in a JSON document, or declared by the
//! `properties` of a JSON Schema, as a list or as a tree.
//!
//! Output goes to stdout; diagnostics go to stderr.

use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use args::{Cli, Invocation};
use clap::{CommandFactory, Parser};
use jsonpaths::{Error, Result};
use tracing::debug;

mod args;
mod input;
mod tracing_level;

fn main() -> ExitCode {
    let invocation = Cli::parse().into_invocation();
    tracing_level::init_stderr_tracing(invocation.log_level);

    let stdin = io::stdin();
    let stdin = (!stdin.is_terminal()).then(|| stdin.lock());

    match run(&invocation, stdin) {
        Ok(output) => {
            print!("{}", newline_terminated(output));
            ExitCode::SUCCESS
        },
        Err(report) => {
            eprintln!("Error: {report:?}");
            if matches!(report.current_context(), Error::MissingInput(_)) {
                if let Err(error) = Cli::command().print_help() {
                    eprintln!("failed to print help: {error}");
                }
            }
            ExitCode::FAILURE
        },
    }
}

/// Read the input, then extract and format the paths
fn run(invocation: &Invocation, stdin: Option<impl Read>) -> Result<String> {
    let text = input::read_input(invocation.input.as_deref(), stdin)?;
    debug!(
        bytes = text.len(),
        source = %invocation.extraction.source(),
        "input read"
    );
    invocation.extraction.run_str(&text)
}

/// Tree output already ends each line; lists and JSON get their newline here
fn newline_terminated(mut output: String) -> String {
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
