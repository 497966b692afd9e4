use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::TargetWords;
use crate::document::TermCounts;

const ROUNDING_SCALE: f64 = 1e10;

/// The TF score of one target word in one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TfScore {
    pub word: String,
    pub document: PathBuf,
    pub score: f64,
}

impl TfScore {
    pub fn document(&self) -> &Path {
        &self.document
    }
}

/// Rounds to ten decimal places to drop floating point noise before scores
/// are compared or displayed.
pub fn round_score(score: f64) -> f64 {
    (score * ROUNDING_SCALE).round() / ROUNDING_SCALE
}

/// One score per target word present in `counts`, in target-word order.
/// A document without tokens yields nothing.
pub fn tf_scores(document: &Path, counts: &TermCounts, targets: &TargetWords) -> Vec<TfScore> {
    if counts.total_tokens == 0 {
        return Vec::new();
    }
    let total = counts.total_tokens as f64;
    targets
        .iter()
        .filter_map(|word| {
            let count = *counts.word_counts.get(word)?;
            Some(TfScore {
                word: word.to_string(),
                document: document.to_path_buf(),
                score: round_score(count as f64 / total),
            })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::document::count_lines;

    fn scores_for(text: &str, words: &str) -> Vec<TfScore> {
        let targets = TargetWords::parse(words);
        let counts = count_lines(text.as_bytes(), &targets).unwrap();
        tf_scores(Path::new("doc.txt"), &counts, &targets)
    }

    #[test]
    fn rounds_to_ten_places_not_one() {
        assert_eq!(round_score(2.0 / 3.0), 0.6666666667);
        assert_eq!(round_score(1.0 / 3.0), 0.3333333333);
        assert_eq!(round_score(0.1 + 0.2), 0.3);
        assert_ne!(round_score(0.123456789012), 0.1);
    }

    #[test]
    fn one_score_per_present_word() {
        let scores = scores_for("cat dog cat", "dog cat fish");
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].word, "dog");
        assert_eq!(scores[0].score, 0.3333333333);
        assert_eq!(scores[1].word, "cat");
        assert_eq!(scores[1].score, 0.6666666667);
        assert!(scores.iter().all(|s| s.document() == Path::new("doc.txt")));
    }

    #[test]
    fn whole_document_of_one_word_scores_one() {
        let scores = scores_for("cat cat", "cat");
        assert_eq!(scores[0].score, 1.0);
    }

    #[test]
    fn document_without_tokens_has_no_scores() {
        assert!(scores_for("?!? ... 123", "cat").is_empty());
        assert!(scores_for("", "cat").is_empty());
    }
}
