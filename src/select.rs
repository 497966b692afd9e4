use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::corpus::DocumentScores;
use crate::tf::TfScore;

/// The best-scoring document for each target word, in the order words were
/// first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    entries: Vec<TfScore>,
    by_word: HashMap<String, usize>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps `record` if its word is new or it scores at least as high as the
    /// current best, so on a tie the later record wins. Returns whether the
    /// table changed.
    pub fn offer(&mut self, record: TfScore) -> bool {
        match self.by_word.get(&record.word) {
            Some(&idx) => {
                if record.score >= self.entries[idx].score {
                    self.entries[idx] = record;
                    true
                } else {
                    false
                }
            }
            None => {
                self.by_word.insert(record.word.clone(), self.entries.len());
                self.entries.push(record);
                true
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&TfScore> {
        self.by_word.get(word).and_then(|idx| self.entries.get(*idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TfScore> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<TfScore> for ResultTable {
    fn extend<I: IntoIterator<Item = TfScore>>(&mut self, iter: I) {
        for record in iter {
            self.offer(record);
        }
    }
}

impl FromIterator<TfScore> for ResultTable {
    fn from_iter<I: IntoIterator<Item = TfScore>>(iter: I) -> Self {
        let mut table = ResultTable::new();
        table.extend(iter);
        table
    }
}

impl Serialize for ResultTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Folds per-document scores, in corpus order, into the result table.
pub fn select_max<I>(documents: I) -> ResultTable
where
    I: IntoIterator<Item = DocumentScores>,
{
    documents
        .into_iter()
        .flat_map(|document| document.scores)
        .collect()
}
