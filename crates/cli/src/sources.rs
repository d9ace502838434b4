//! Loading filter rules from files and standard input.
//!
//! Rules files hold one rule per line. Blank lines and lines whose first
//! non-blank character is `#` or `;` are skipped. The path `-` reads from
//! standard input.

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load rules from a `--filter-file` source.
#[derive(Debug, Error)]
pub(crate) enum SourceError {
    #[error("failed to read filter file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read filter file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read filter rules from standard input: {source}")]
    StandardInput {
        #[source]
        source: io::Error,
    },
}

/// Where a `--filter-file` argument points.
#[derive(Clone, Debug, Eq, PartialEq)]
enum RuleSource {
    File(PathBuf),
    StandardInput,
}

impl RuleSource {
    fn from_arg(arg: &OsStr) -> Self {
        if arg == "-" {
            Self::StandardInput
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    fn load(&self) -> Result<Vec<String>, SourceError> {
        match self {
            Self::File(path) => {
                let file = File::open(path).map_err(|source| SourceError::Open {
                    path: path.clone(),
                    source,
                })?;
                collect_rules(BufReader::new(file)).map_err(|source| SourceError::Read {
                    path: path.clone(),
                    source,
                })
            }
            Self::StandardInput => {
                #[cfg(test)]
                if let Some(data) = take_rules_stdin_input() {
                    return load_standard_input(io::Cursor::new(data));
                }
                load_standard_input(io::stdin().lock())
            }
        }
    }
}

/// Converts a rule argument into text, replacing invalid UTF-8.
pub(crate) fn os_string_to_rule(value: OsString) -> String {
    value
        .into_string()
        .unwrap_or_else(|value| value.to_string_lossy().into_owned())
}

/// Appends the rules from every file in `files` to `destination`, in order.
///
/// Stops at the first source that cannot be read.
pub(crate) fn append_rules_from_files(
    destination: &mut Vec<String>,
    files: &[OsString],
) -> Result<(), SourceError> {
    for arg in files {
        let source = RuleSource::from_arg(arg);
        let rules = source.load()?;
        tracing::debug!(
            target: crate::CLI_TARGET,
            source = ?source,
            rules = rules.len(),
            "loaded filter rules"
        );
        destination.extend(rules);
    }
    Ok(())
}

fn load_standard_input<R: BufRead>(reader: R) -> Result<Vec<String>, SourceError> {
    collect_rules(reader).map_err(|source| SourceError::StandardInput { source })
}

/// Collects the rule lines of `reader`, trimmed, skipping comments and blanks.
///
/// Lines may end in `\n` or `\r\n`; invalid UTF-8 is replaced.
pub(crate) fn collect_rules<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut rules = Vec::new();
    for line in reader.split(b'\n') {
        let line = line?;
        let text = String::from_utf8_lossy(&line);
        let rule = text.trim();
        if rule.is_empty() || rule.starts_with(['#', ';']) {
            continue;
        }
        rules.push(rule.to_owned());
    }
    Ok(rules)
}

#[cfg(test)]
thread_local! {
    static RULES_STDIN_INPUT: std::cell::RefCell<Option<Vec<u8>>> = const {
        std::cell::RefCell::new(None)
    };
}

#[cfg(test)]
fn take_rules_stdin_input() -> Option<Vec<u8>> {
    RULES_STDIN_INPUT.with(|slot| slot.borrow_mut().take())
}

#[cfg(test)]
pub(crate) fn set_rules_stdin_input(data: Vec<u8>) {
    RULES_STDIN_INPUT.with(|slot| *slot.borrow_mut() = Some(data));
}
