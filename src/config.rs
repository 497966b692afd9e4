use std::collections::HashSet;
use std::io::BufRead;
use std::path::PathBuf;

use log::debug;

use crate::error::{Error, Result};

/// The words whose TF scores are computed, lowercased, deduplicated and kept
/// in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetWords {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl TargetWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut targets = TargetWords::default();
        for word in words {
            let word = word.as_ref().trim().to_ascii_lowercase();
            if word.is_empty() {
                continue;
            }
            if targets.lookup.insert(word.clone()) {
                targets.words.push(word);
            }
        }
        targets
    }

    /// Parses a line of words separated by runs of whitespace.
    pub fn parse(line: &str) -> Self {
        Self::new(line.split_whitespace())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.lookup.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// One run's input: the corpus directory and the target words.
#[derive(Debug, Clone)]
pub struct Config {
    pub directory: PathBuf,
    pub targets: TargetWords,
}

impl Config {
    pub fn parse(directory: &str, words: &str) -> Result<Self> {
        let directory = directory.trim();
        if directory.is_empty() {
            return Err(Error::MissingInput("directory path"));
        }
        Ok(Config {
            directory: PathBuf::from(directory),
            targets: TargetWords::parse(words),
        })
    }

    /// Reads the directory line then the target-word line. A missing word
    /// line means no target words.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut directory = String::new();
        if reader.read_line(&mut directory)? == 0 {
            return Err(Error::MissingInput("directory path"));
        }
        let mut words = String::new();
        reader.read_line(&mut words)?;
        let config = Config::parse(&directory, &words)?;
        debug!(
            "config: directory {}, {} target words",
            config.directory.display(),
            config.targets.len()
        );
        Ok(config)
    }
}
