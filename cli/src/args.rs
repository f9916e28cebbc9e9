//! Command line surface
//!
//! `extract` is the default subcommand, so `extract-jsonpaths data.json -l`
//! and `extract-jsonpaths extract data.json -l` are the same invocation.
//! `--log-level` is global and may appear before or after the subcommand.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jsonpaths::{Command, Extraction, OutputFormat, PathSource};

use crate::tracing_level::TracingLevel;

/// CLI tool to extract JSONPath(s) from a JSON object.
#[derive(Parser, Debug)]
#[command(name = "extract-jsonpaths", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    extract: ExtractArgs,

    #[arg(
        long,
        global = true,
        help = "tracing level for diagnostics written to stderr [default: warn, or the directives in JSONPATHS_LOG]"
    )]
    log_level: Option<TracingLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// output JSONPath(s)
    Extract(ExtractArgs),

    /// output a tree representation of JSONPath(s)
    Tree(InputArgs),
}

#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// JSON file to read; stdin is read when omitted
    input: Option<PathBuf>,

    /// extract JSONPath(s) from the properties of a JSON Schema instead of a JSON object
    #[arg(short = 's', long)]
    from_schema: bool,
}

#[derive(Args, Debug, Clone)]
struct ExtractArgs {
    #[command(flatten)]
    input: InputArgs,

    /// output only leaf nodes
    #[arg(short, long)]
    leaves: bool,

    /// output as JSON array
    #[arg(short, long)]
    json: bool,
}

/// Everything a single run needs, with the default subcommand applied
#[derive(Debug, Clone)]
pub struct Invocation {
    pub input:      Option<PathBuf>,
    pub log_level:  Option<TracingLevel>,
    pub extraction: Extraction,
}

impl InputArgs {
    const fn source(&self) -> PathSource {
        if self.from_schema {
            PathSource::Schema
        } else {
            PathSource::Object
        }
    }

    fn into_invocation(self, command: Command, log_level: Option<TracingLevel>) -> Invocation {
        Invocation {
            extraction: Extraction::new(self.source(), command),
            input: self.input,
            log_level,
        }
    }
}

impl ExtractArgs {
    fn into_invocation(self, log_level: Option<TracingLevel>) -> Invocation {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Lines
        };
        self.input.into_invocation(
            Command::Extract {
                leaves: self.leaves,
                format,
            },
            log_level,
        )
    }
}

impl Cli {
    /// Resolve the subcommand, falling back to `extract`
    pub fn into_invocation(self) -> Invocation {
        match self.command {
            Some(Commands::Extract(args)) => args.into_invocation(self.log_level),
            Some(Commands::Tree(args)) => args.into_invocation(Command::Tree, self.log_level),
            None => self.extract.into_invocation(self.log_level),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "tests unwrap on known-good fixtures")]
mod tests {
    use std::path::Path;

    use super::*;

    fn parse(args: &[&str]) -> Invocation {
        Cli::try_parse_from(std::iter::once("extract-jsonpaths").chain(args.iter().copied()))
            .unwrap()
            .into_invocation()
    }

    #[test]
    fn test_extract_is_default() {
        let invocation = parse(&["data.json", "-l", "-j"]);
        assert_eq!(invocation.input.as_deref(), Some(Path::new("data.json")));
        assert_eq!(invocation.extraction.source(), PathSource::Object);
        assert_eq!(invocation.extraction.command(), Command::Extract {
            leaves: true,
            format: OutputFormat::Json,
        });
    }

    #[test]
    fn test_explicit_extract_with_schema() {
        let invocation = parse(&["extract", "schema.json", "--from-schema", "--leaves"]);
        assert_eq!(invocation.input.as_deref(), Some(Path::new("schema.json")));
        assert_eq!(invocation.extraction.source(), PathSource::Schema);
        assert_eq!(invocation.extraction.command(), Command::Extract {
            leaves: true,
            format: OutputFormat::Lines,
        });
    }

    #[test]
    fn test_tree_subcommand() {
        let invocation = parse(&["tree", "-s", "--log-level", "debug"]);
        assert_eq!(invocation.input, None);
        assert_eq!(invocation.log_level, Some(TracingLevel::Debug));
        assert_eq!(invocation.extraction.source(), PathSource::Schema);
        assert_eq!(invocation.extraction.command(), Command::Tree);
    }

    #[test]
    fn test_log_level_before_subcommand() {
        let invocation = parse(&["--log-level", "debug", "tree", "x.json"]);
        assert_eq!(invocation.input.as_deref(), Some(Path::new("x.json")));
        assert_eq!(invocation.log_level, Some(TracingLevel::Debug));
        assert_eq!(invocation.extraction.command(), Command::Tree);

        let invocation = parse(&["--log-level", "trace", "extract", "x.json", "-l"]);
        assert_eq!(invocation.log_level, Some(TracingLevel::Trace));
        assert_eq!(invocation.extraction.command(), Command::Extract {
            leaves: true,
            format: OutputFormat::Lines,
        });
    }

    #[test]
    fn test_log_level_with_default_subcommand() {
        let invocation = parse(&["data.json", "--log-level", "info"]);
        assert_eq!(invocation.input.as_deref(), Some(Path::new("data.json")));
        assert_eq!(invocation.log_level, Some(TracingLevel::Info));
    }

    #[test]
    fn test_no_arguments_reads_stdin() {
        let invocation = parse(&[]);
        assert_eq!(invocation.input, None);
        assert_eq!(invocation.log_level, None);
        assert_eq!(invocation.extraction.command(), Command::default());
    }

    #[test]
    fn test_tree_rejects_extract_flags() {
        let result = Cli::try_parse_from(["extract-jsonpaths", "tree", "--leaves"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let result = Cli::try_parse_from(["extract-jsonpaths", "--log-level", "loud"]);
        assert!(result.is_err());
    }
}
