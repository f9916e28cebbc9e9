//! From a parsed document to the text a caller prints
//!
//! An [`Extraction`] pairs where the paths come from ([`PathSource`]) with what
//! to do with them ([`Command`]).

use error_stack::{Report, ResultExt};
use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};
use tracing::debug;

use crate::error::{Error, Result};
use crate::extraction::{PathSet, extract_from_object, extract_from_schema_document};
use crate::resolver::{LocalRefResolver, ReferenceResolver};
use crate::tree::PathTree;

/// What the input document is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PathSource {
    /// Plain JSON data, paths follow its keys and arrays
    #[default]
    Object,
    /// JSON Schema, paths follow its `properties`
    Schema,
}

/// How a flat path list is written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// One path per line
    #[default]
    Lines,
    /// A compact JSON array of strings
    Json,
}

/// What to produce from the extracted paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A flat list of paths
    Extract {
        /// Keep only paths that no other path extends
        leaves: bool,
        /// Line or JSON array output
        format: OutputFormat,
    },
    /// An indented tree of path segments
    Tree,
}

impl Default for Command {
    fn default() -> Self {
        Self::Extract {
            leaves: false,
            format: OutputFormat::default(),
        }
    }
}

/// One configured run of the pipeline
#[derive(Debug, Clone, Default)]
pub struct Extraction<R = LocalRefResolver> {
    source:   PathSource,
    command:  Command,
    resolver: R,
}

impl Extraction<LocalRefResolver> {
    /// Create an extraction resolving local `$ref`s in schema input
    #[must_use]
    pub const fn new(source: PathSource, command: Command) -> Self {
        Self {
            source,
            command,
            resolver: LocalRefResolver,
        }
    }
}

impl<R: ReferenceResolver> Extraction<R> {
    /// Swap in another schema reference resolver
    #[must_use]
    pub fn with_resolver<T: ReferenceResolver>(self, resolver: T) -> Extraction<T> {
        Extraction {
            source: self.source,
            command: self.command,
            resolver,
        }
    }

    /// Where paths are read from
    #[must_use]
    pub const fn source(&self) -> PathSource { self.source }

    /// What is produced
    #[must_use]
    pub const fn command(&self) -> Command { self.command }

    /// Extract the full path set from `document`
    ///
    /// # Errors
    ///
    /// Schema input is dereferenced first; a reference that cannot be resolved
    /// fails with [`Error::ReferenceResolution`]. Object input never fails.
    pub fn collect_paths(&self, document: &Value) -> Result<PathSet> {
        match self.source {
            PathSource::Object => Ok(extract_from_object(document)),
            PathSource::Schema => {
                let resolved = self.resolver.resolve(document)?;
                Ok(extract_from_schema_document(&resolved))
            },
        }
    }

    /// Run the whole pipeline on a parsed document
    ///
    /// # Errors
    ///
    /// Fails when the paths cannot be collected (see
    /// [`collect_paths`](Self::collect_paths)) or when JSON output cannot be
    /// serialized ([`Error::Serialization`]).
    pub fn run(&self, document: &Value) -> Result<String> {
        let paths = self.collect_paths(document)?;
        debug!(source = %self.source, command = ?self.command, count = paths.len(), "running extraction");

        match self.command {
            Command::Extract { leaves, format } => {
                if leaves {
                    let tree = PathTree::new(&paths);
                    format_paths(&tree.leaf_paths(), format)
                } else {
                    format_paths(&paths, format)
                }
            },
            Command::Tree => Ok(PathTree::new(&paths).render()),
        }
    }

    /// Parse `input` as JSON and run the pipeline on it
    ///
    /// # Errors
    ///
    /// Any error of [`parse_document`] or [`run`](Self::run).
    pub fn run_str(&self, input: &str) -> Result<String> {
        let document = parse_document(input)?;
        self.run(&document)
    }
}

/// Parse JSON text, rejecting empty input
///
/// # Errors
///
/// Returns [`Error::MissingInput`] for empty or whitespace-only input and
/// [`Error::Json`] when the text is not a JSON document.
///
/// ```
/// use jsonpaths::{Error, parse_document};
///
/// assert!(parse_document(r#"{"a": 1}"#).is_ok());
/// let report = parse_document(" \n").unwrap_err();
/// assert!(matches!(report.current_context(), Error::MissingInput(_)));
/// ```
pub fn parse_document(input: &str) -> Result<Value> {
    if input.trim().is_empty() {
        return Err(Report::new(Error::missing("input via file or stdin")));
    }
    serde_json::from_str(input).change_context(Error::Json(
        "input is not a valid JSON document".to_string(),
    ))
}

fn format_paths<P>(paths: P, format: OutputFormat) -> Result<String>
where
    P: IntoIterator + Serialize + Copy,
    P::Item: std::fmt::Display,
{
    match format {
        OutputFormat::Lines => Ok(paths.into_iter().join("\n")),
        OutputFormat::Json => serde_json::to_string(&paths)
            .change_context(Error::Serialization("path list".to_string())),
    }
}
