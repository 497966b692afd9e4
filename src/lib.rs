//! Finds, for each target word, the document in a directory where the word
//! has its highest term frequency.
//!
//! ```no_run
//! use tf_max::{corpus, select_max, TargetWords};
//!
//! let targets = TargetWords::parse("cat dog");
//! let scans = corpus::scan("books".as_ref(), &targets)?;
//! for best in select_max(scans).iter() {
//!     println!("{} {} {}", best.word, best.document.display(), best.score);
//! }
//! # Ok::<(), tf_max::Error>(())
//! ```

pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod lexer;
pub mod report;
pub mod select;
pub mod tf;

pub use config::{Config, TargetWords};
pub use corpus::{scan, scan_concurrent, DocumentScores};
pub use document::{Document, TermCounts};
pub use error::{Error, Result};
pub use lexer::tokenize;
pub use report::{to_json, write_report};
pub use select::{select_max, ResultTable};
pub use tf::{round_score, tf_scores, TfScore};
