//! Line-oriented `NAME=VALUE` parser with shell-like quoting.
//!
//! Responsibilities:
//! - Parse a variable-definition file into a flat value table.
//! - Handle values wrapped in `"`, `'`, or backtick, including values that
//!   span multiple lines until the closing quote character.
//!
//! Does NOT handle:
//! - Structured `.yml`/`.yaml`/`.json` documents (see structured.rs).
//! - Variable interpolation within values.
//!
//! Invariants:
//! - Later definitions of a key overwrite earlier ones.
//! - Quote stripping removes every leading and trailing occurrence of the
//!   quote character, so a value of only quote characters strips to empty.
//! - A file ending inside an open quoted value stores the accumulated text
//!   as-is rather than failing.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::EnvFileError;

const QUOTE_CHARS: [char; 3] = ['"', '\'', '`'];

/// Open `path` and parse it as a plain variable-definition file.
pub(crate) fn parse_file(path: &Path) -> Result<HashMap<String, String>, EnvFileError> {
    let handle = File::open(path).map_err(|source| EnvFileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse(BufReader::new(handle), path)
}

/// Parse plain-format lines from `reader` into a value table.
///
/// `path` is used for error context only.
pub(crate) fn parse<R: BufRead>(
    reader: R,
    path: &Path,
) -> Result<HashMap<String, String>, EnvFileError> {
    let mut variables = HashMap::new();
    let mut lines = reader.lines();

    while let Some(line) = lines.next() {
        let line = line.map_err(|source| scan_error(path, source))?;
        let line = line.trim();

        match line.split_once('=') {
            // Bare NAME defines the variable with an empty value.
            None => {
                if !line.is_empty() {
                    variables.insert(line.to_string(), String::new());
                }
            }
            Some((name, rest)) => {
                if name.is_empty() {
                    continue;
                }
                let quote = rest.chars().next().filter(|c| QUOTE_CHARS.contains(c));
                match quote {
                    None => {
                        variables.insert(name.to_string(), rest.to_string());
                    }
                    Some(quote) if rest.len() > 1 && rest.ends_with(quote) => {
                        variables.insert(name.to_string(), rest.trim_matches(quote).to_string());
                    }
                    Some(quote) => {
                        // Opening quote with no close on this line: the value
                        // continues on subsequent lines, newline-joined.
                        let mut value = rest.to_string();
                        let mut closed = false;
                        for next in lines.by_ref() {
                            let next = next.map_err(|source| scan_error(path, source))?;
                            value.push('\n');
                            value.push_str(next.trim());
                            if value.ends_with(quote) {
                                closed = true;
                                break;
                            }
                        }
                        if closed {
                            value = value.trim_matches(quote).to_string();
                        }
                        // An unterminated quote keeps the accumulated text.
                        variables.insert(name.to_string(), value);
                    }
                }
            }
        }
    }

    Ok(variables)
}

fn scan_error(path: &Path, source: std::io::Error) -> EnvFileError {
    EnvFileError::Scan {
        path: path.to_path_buf(),
        source,
    }
}
