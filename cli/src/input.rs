use std::fs;
use std::io::Read;
use std::path::Path;

use error_stack::{Report, ResultExt};
use jsonpaths::{Error, Result};
use tracing::debug;

/// Read the whole input from `path`, or from `stdin` when no path is given
///
/// `stdin` is `None` when it is attached to a terminal; that counts as no
/// input rather than waiting for the user to type a document.
pub fn read_input(path: Option<&Path>, stdin: Option<impl Read>) -> Result<String> {
    let input = match (path, stdin) {
        (Some(path), _) => {
            debug!(path = %path.display(), "reading input file");
            fs::read_to_string(path)
                .map_err(|error| Report::new(Error::io_failed("read", path, error)))?
        },
        (None, Some(mut stdin)) => {
            debug!("reading input from stdin");
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .change_context(Error::failed_to("read", "stdin"))?;
            buffer
        },
        (None, None) => String::new(),
    };

    if input.is_empty() {
        return Err(Report::new(Error::missing("input via file or stdin")));
    }
    Ok(input)
}
