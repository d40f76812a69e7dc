//! Line sources for the parser: a file on disk or text already in memory.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

/// Where hextuple lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSource {
    /// A UTF-8 file, read line by line.
    File(PathBuf),
    /// In-memory text holding one hextuple per line.
    Text(String),
}

impl LineSource {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        LineSource::File(path.as_ref().to_path_buf())
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        LineSource::Text(text.into())
    }

    /// Opens the source and returns its lines, without line terminators.
    pub fn lines(self) -> io::Result<SourceLines> {
        match self {
            LineSource::File(path) => {
                debug!("Reading hextuples from file: {}", path.display());
                let file = File::open(&path)?;
                Ok(SourceLines::File(BufReader::new(file).lines()))
            }
            LineSource::Text(text) => Ok(SourceLines::Text { text, pos: 0 }),
        }
    }
}

impl From<&str> for LineSource {
    fn from(text: &str) -> Self {
        LineSource::Text(text.to_string())
    }
}

impl From<String> for LineSource {
    fn from(text: String) -> Self {
        LineSource::Text(text)
    }
}

impl From<PathBuf> for LineSource {
    fn from(path: PathBuf) -> Self {
        LineSource::File(path)
    }
}

impl From<&Path> for LineSource {
    fn from(path: &Path) -> Self {
        LineSource::File(path.to_path_buf())
    }
}

/// Iterator over the lines of an opened [`LineSource`].
#[derive(Debug)]
pub enum SourceLines {
    File(io::Lines<BufReader<File>>),
    Text { text: String, pos: usize },
}

impl Iterator for SourceLines {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SourceLines::File(lines) => lines
                .next()
                .map(|line| line.map(|l| l.trim_end_matches('\r').to_string())),
            SourceLines::Text { text, pos } => {
                if *pos >= text.len() {
                    return None;
                }
                let rest = &text[*pos..];
                let (line, consumed) = match rest.find('\n') {
                    Some(i) => (&rest[..i], i + 1),
                    None => (rest, rest.len()),
                };
                let line = line.trim_end_matches('\r').to_string();
                *pos += consumed;
                Some(Ok(line))
            }
        }
    }
}
