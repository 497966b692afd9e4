use std::io::{self, Write};

use crate::select::ResultTable;

/// Writes one block per word: the word, its document and its score, then a
/// blank line.
pub fn write_report<W: Write>(out: &mut W, table: &ResultTable) -> io::Result<()> {
    for result in table.iter() {
        writeln!(out, "Word: {}", result.word)?;
        writeln!(out, "Document: {}", result.document.display())?;
        writeln!(out, "TF Score: {:?}", result.score)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn to_json(table: &ResultTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(table)
}
