//! Shared fixtures for the schema-filter test suites.
//!
//! Rules files are written into a [`tempfile::TempDir`] owned by the caller so
//! they disappear when the test finishes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Writes `lines` to `dir/name`, one per line, and returns the file path.
pub fn write_rules_file<I, S>(dir: &Path, name: &str, lines: I) -> io::Result<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line.as_ref());
        contents.push('\n');
    }

    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// A temporary directory holding a single rules file.
#[derive(Debug)]
pub struct RulesFile {
    _dir: TempDir,
    path: PathBuf,
}

impl RulesFile {
    /// Creates a fresh temporary directory containing `rules.txt` with `lines`.
    pub fn new<I, S>(lines: I) -> io::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dir = tempfile::tempdir()?;
        let path = write_rules_file(dir.path(), "rules.txt", lines)?;
        Ok(Self { _dir: dir, path })
    }

    /// Path of the rules file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_rule() {
        let dir = tempfile::tempdir().unwrap();
        let path =
            write_rules_file(dir.path(), "a.rules", ["IgnoreSchema(dev)", "# note"]).unwrap();

        let written = fs::read_to_string(path).unwrap();
        assert_eq!(written, "IgnoreSchema(dev)\n# note\n");
    }

    #[test]
    fn rules_file_lives_until_dropped() {
        let file = RulesFile::new(["KeepName(x)"]).unwrap();
        let path = file.path().to_path_buf();
        assert!(path.exists());

        drop(file);
        assert!(!path.exists());
    }
}
