//! Batch compression over a file set or one folder.
//!
//! Structural preconditions are validated before any file is touched;
//! after that every file is processed independently and failures never
//! abort the rest of the batch.

use crate::session::compress_tree;
use mx_catalog::Catalog;
use mx_core::{MxError, Result, SortOrder};
use mx_parser::parse_tree;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File extensions eligible for batch compression.
const XML_EXTENSIONS: &[&str] = &[".xml"];

/// Per-file outcome, reported in processing order.
#[derive(Debug, Clone, Serialize)]
pub struct CompressStatus {
    pub file: PathBuf,
    pub success: bool,
    pub files_processed: usize,
    pub total_files: usize,
}

/// Aggregate result of one batch invocation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub outcomes: Vec<CompressStatus>,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

/// Compress a set of files, or the `.xml` files under a single folder,
/// in place.
///
/// `on_progress` fires once per file, in processing order, after that
/// file's write (or failure) completes. The processed count increments
/// exactly once per file, so the final count always equals the file-set
/// size.
pub async fn compress_paths<F>(
    paths: &[PathBuf],
    sort_order: SortOrder,
    mut on_progress: F,
) -> Result<BatchSummary>
where
    F: FnMut(&CompressStatus),
{
    let files = resolve_file_set(paths)?;
    let catalog = Catalog::new();
    let total_files = files.len();
    let mut summary = BatchSummary::default();

    for (index, file) in files.iter().enumerate() {
        let outcome = compress_one(&catalog, file, sort_order).await;
        if let Err(error) = &outcome {
            warn!(file = %file.display(), %error, "compression failed");
        }
        let status = CompressStatus {
            file: file.clone(),
            success: outcome.is_ok(),
            files_processed: index + 1,
            total_files,
        };
        if status.success {
            summary.succeeded += 1;
        } else {
            summary.failed += 1;
        }
        on_progress(&status);
        summary.outcomes.push(status);
    }

    info!(
        total = total_files,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "batch complete"
    );
    Ok(summary)
}

async fn compress_one(catalog: &Catalog, path: &Path, sort_order: SortOrder) -> Result<()> {
    let content = mx_storage::read_to_string(path).await?;
    let tree = parse_tree(&content, true)?;
    let compressed = compress_tree(catalog, &tree, sort_order)?;
    mx_storage::write_string(path, &compressed).await
}

/// Classify the input paths and produce the sorted file set.
fn resolve_file_set(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if paths.is_empty() {
        return Err(MxError::InvalidInput(
            "no files or folders selected to compress".to_string(),
        ));
    }
    let mut files = Vec::new();
    let mut folders = Vec::new();
    for path in paths {
        if mx_storage::is_file(path) {
            files.push(path.clone());
        } else if mx_storage::is_dir(path) {
            folders.push(path.clone());
        } else {
            return Err(MxError::NotFound(path.display().to_string()));
        }
    }
    if !files.is_empty() && !folders.is_empty() {
        return Err(MxError::MixedInput(
            "can't compress files and folders at the same time".to_string(),
        ));
    }
    if folders.len() > 1 {
        return Err(MxError::MixedInput(
            "can't compress more than one folder at the same time".to_string(),
        ));
    }
    if let Some(folder) = folders.first() {
        return mx_storage::collect_files(folder, XML_EXTENSIONS);
    }
    files.sort();
    Ok(files)
}
