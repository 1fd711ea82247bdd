// Corpus loading — find candidate files on disk and read them.
//
// Only problems with the corpus root are fatal. Anything below that
// (an unreadable entry, a file that is not valid UTF-8) is logged and
// skipped, so one bad file cannot take down a whole run and can never
// show up as a spurious all-zero profile either.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use walkdir::WalkDir;

use super::document::Document;

/// Find files under `dir` with the given extension (case-insensitive).
///
/// Non-recursive by default; `recursive` walks the whole subtree.
/// Results are sorted lexicographically by path, so corpus indices are
/// stable across runs and platforms.
pub fn discover(dir: &Path, extension: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let meta = fs::metadata(dir)
        .with_context(|| format!("Cannot access corpus directory {}", dir.display()))?;
    if !meta.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let mut walker = WalkDir::new(dir);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut paths = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let wanted = entry
            .path()
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if wanted {
            paths.push(entry.path().to_path_buf());
        }
    }

    paths.sort();
    Ok(paths)
}

/// Read each discovered file into a [`Document`].
///
/// Files that cannot be read (missing, permissions, invalid UTF-8) are
/// warned about and excluded from the corpus.
pub fn read_documents(paths: &[PathBuf]) -> Vec<Document> {
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        match fs::read_to_string(path) {
            Ok(content) => documents.push(Document::new(path.display().to_string(), content)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable file");
            }
        }
    }
    documents
}

/// Discover and read a corpus in one step.
pub fn load_corpus(dir: &Path, extension: &str, recursive: bool) -> Result<Vec<Document>> {
    let paths = discover(dir, extension, recursive)?;
    info!(
        dir = %dir.display(),
        files = paths.len(),
        "Discovered candidate files"
    );

    let documents = read_documents(&paths);
    if documents.len() < paths.len() {
        warn!(
            skipped = paths.len() - documents.len(),
            "Excluded unreadable files from the corpus"
        );
    }
    Ok(documents)
}
