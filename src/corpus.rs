use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};

use crate::config::TargetWords;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::tf::{tf_scores, TfScore};

/// Scan output for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentScores {
    pub document: PathBuf,
    pub total_tokens: usize,
    pub scores: Vec<TfScore>,
}

/// Regular files directly inside `dir`, in the order the filesystem lists
/// them. Subdirectories and other entries are skipped.
pub fn list_documents(dir: &Path) -> Result<Vec<Document>> {
    debug!("reading directory {}", dir.display());
    let unreadable = |source: io::Error| Error::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };
    if !dir.is_dir() {
        return Err(unreadable(io::Error::new(
            io::ErrorKind::NotFound,
            "path is not a directory",
        )));
    }
    let mut documents = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if path.is_file() {
            documents.push(Document::new(path));
        } else {
            debug!("skipping {}: not a regular file", path.display());
        }
    }
    Ok(documents)
}

/// Counts one document and derives its TF scores.
pub fn scan_document(document: Document, targets: &TargetWords) -> Result<DocumentScores> {
    let counts = document.count(targets)?;
    let scores = tf_scores(document.path(), &counts, targets);
    Ok(DocumentScores {
        document: document.into_path(),
        total_tokens: counts.total_tokens,
        scores,
    })
}

/// Scans every document in `dir` one at a time. The first failure aborts
/// the scan.
pub fn scan(dir: &Path, targets: &TargetWords) -> Result<Vec<DocumentScores>> {
    let results = list_documents(dir)?
        .into_iter()
        .map(|document| scan_document(document, targets))
        .collect::<Result<Vec<_>>>()?;
    log_summary(dir, &results);
    Ok(results)
}

/// Like [`scan`], but documents are read on tokio's blocking pool. Results
/// come back in listing order so they fold exactly as a sequential scan.
pub async fn scan_concurrent(
    dir: &Path,
    targets: Arc<TargetWords>,
) -> Result<Vec<DocumentScores>> {
    let handles: Vec<_> = list_documents(dir)?
        .into_iter()
        .map(|document| {
            let targets = Arc::clone(&targets);
            tokio::task::spawn_blocking(move || scan_document(document, &targets))
        })
        .collect();
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await??);
    }
    log_summary(dir, &results);
    Ok(results)
}

fn log_summary(dir: &Path, results: &[DocumentScores]) {
    let total_tokens: usize = results.iter().map(|r| r.total_tokens).sum();
    let scores: usize = results.iter().map(|r| r.scores.len()).sum();
    info!(
        "scanned {} documents in {}: {} tokens, {} scores",
        results.len(),
        dir.display(),
        total_tokens,
        scores
    );
}
