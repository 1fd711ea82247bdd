// Plain-text report files, one block per ranked pair.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::pipeline::compare::CompareOutcome;

/// Write the ranked pairs to a plain-text report file.
///
/// Parent directories are created as needed. Returns the path that was
/// written, for display.
pub fn write_report(outcome: &CompareOutcome, path: &Path) -> Result<String> {
    let mut body = String::new();
    body.push_str("Top Similar Document Pairs\n");
    body.push_str(&format!(
        "Generated: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    body.push_str(&format!(
        "Documents: {}  Pairs scored: {}\n\n",
        outcome.document_count, outcome.pair_count
    ));

    for pair in &outcome.ranked {
        body.push_str(&format!(
            "{}. Similarity Score: {:.2}%\n",
            pair.rank, pair.score
        ));
        body.push_str(&format!("   Document 1: {}\n", pair.left));
        body.push_str(&format!("   Document 2: {}\n", pair.right));
        body.push_str("   ----------------------------------------\n\n");
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Cannot create report directory {}", parent.display())
            })?;
        }
    }
    fs::write(path, body).with_context(|| format!("Cannot write report to {}", path.display()))?;

    Ok(path.display().to_string())
}
