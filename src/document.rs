use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::TargetWords;
use crate::error::{Error, Result};
use crate::lexer::Lexer;

/// Token totals for a single document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermCounts {
    /// Every token in the document, target word or not.
    pub total_tokens: usize,
    /// Occurrences of each target word that appeared at least once.
    pub word_counts: HashMap<String, usize>,
}

impl TermCounts {
    pub fn add_line(&mut self, line: &str, targets: &TargetWords) {
        for token in Lexer::new(line) {
            self.total_tokens += 1;
            if targets.contains(&token) {
                *self.word_counts.entry(token).or_insert(0) += 1;
            }
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.word_counts.get(word).copied().unwrap_or(0)
    }
}

/// Counts tokens line by line in a single pass over `reader`. Bytes that are
/// not valid UTF-8 are replaced rather than rejected.
pub fn count_lines<R: BufRead>(mut reader: R, targets: &TargetWords) -> io::Result<TermCounts> {
    let mut counts = TermCounts::default();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        counts.add_line(&String::from_utf8_lossy(&line), targets);
    }
    Ok(counts)
}

/// A file in the corpus, identified by its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Document { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }

    /// Reads the document once and tallies its tokens.
    pub fn count(&self, targets: &TargetWords) -> Result<TermCounts> {
        debug!("reading {}", self.path.display());
        let file = File::open(&self.path).map_err(|source| self.read_error(source))?;
        let counts =
            count_lines(BufReader::new(file), targets).map_err(|source| self.read_error(source))?;
        debug!(
            "{}: {} tokens, {} target words present",
            self.path.display(),
            counts.total_tokens,
            counts.word_counts.len()
        );
        Ok(counts)
    }

    fn read_error(&self, source: io::Error) -> Error {
        Error::DocumentRead {
            path: self.path.clone(),
            source,
        }
    }
}
