//! Purpose: Define the stable public surface for jotfile.
//! Exports: The four file operations plus the error and option types they use.
//! Role: Only public path to the core modules; hides classification internals.
//! Invariants: Operations expect absolute paths; relative-path resolution is
//! the caller's job.
//! Invariants: Caller-supplied documents are validated before any I/O is
//! issued.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::core::{reader, validate, writer};

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::merge::deep_merge;
pub use crate::core::validate::{is_plain_object, is_valid_json_object_str};
pub use crate::core::writer::Indentation;

pub type ApiResult<T> = Result<T, Error>;

/// Returns the JSON object stored at `path`.
///
/// Fails with `EmptyFile` for a zero-length file, `NotAJson` for content
/// that is not a top-level JSON object, and a system kind (`NotFound`,
/// `Permission`, `Io`) when the bytes cannot be read at all.
pub async fn read(path: impl AsRef<Path>) -> ApiResult<Value> {
    reader::read_document(path.as_ref()).await
}

/// Creates or fully replaces the file at `path` with `content`.
///
/// An existing file is overwritten regardless of what it held, and missing
/// ancestor directories are created. Fails with `NotAValidObject` before
/// touching the filesystem if `content` is not a plain object.
pub async fn overwrite(
    path: impl AsRef<Path>,
    content: &Value,
    indentation: Indentation,
) -> ApiResult<()> {
    let path = path.as_ref();
    require_plain_object(content, path)?;
    writer::write_document(path, content, indentation).await
}

/// Merges `content` into the file at `path`, creating it when absent.
///
/// An existing document deep-merges with `content` (its values win scalar
/// conflicts, arrays concatenate). A missing or empty file is treated as
/// "nothing to merge with" and `content` is written as-is. A malformed file
/// or an access failure propagates; join never replaces content it could
/// not read.
pub async fn join(
    path: impl AsRef<Path>,
    content: &Value,
    indentation: Indentation,
) -> ApiResult<()> {
    let path = path.as_ref();
    require_plain_object(content, path)?;

    match reader::read_document(path).await {
        Ok(existing) => {
            let combined = deep_merge(existing, content.clone());
            writer::write_document(path, &combined, indentation).await
        }
        Err(err) if matches!(err.kind(), ErrorKind::EmptyFile | ErrorKind::NotFound) => {
            debug!(path = %path.display(), "no existing content; writing document as-is");
            writer::write_document(path, content, indentation).await
        }
        Err(err) => Err(err),
    }
}

/// Combines the documents at `path_a` and `path_b` into `target`.
///
/// Both inputs present: their deep merge is written, `path_b` winning
/// conflicts. Exactly one input empty: the other is copied to `target`
/// without invoking the merge. Both empty: fails with `EmptyFile`. When the
/// two input paths are equal the file is read once and duplicated to
/// `target` (or the read failure propagates). Malformed inputs and access
/// failures always propagate, tagged with the path that caused them.
pub async fn merge(
    path_a: impl AsRef<Path>,
    path_b: impl AsRef<Path>,
    target: impl AsRef<Path>,
    indentation: Indentation,
) -> ApiResult<()> {
    let path_a = path_a.as_ref();
    let path_b = path_b.as_ref();
    let target = target.as_ref();

    if path_a == path_b {
        // Single read serving both roles; merging a document with itself is
        // a duplicate, and a second read of the same path could race.
        let document = reader::read_document(path_a).await?;
        return writer::write_document(target, &document, indentation).await;
    }

    let first = read_tolerating_empty(path_a).await?;
    let second = read_tolerating_empty(path_b).await?;

    match (first, second) {
        (Some(a), Some(b)) => {
            let combined = deep_merge(a, b);
            writer::write_document(target, &combined, indentation).await
        }
        (Some(a), None) => {
            debug!(path = %path_b.display(), "empty merge input; copying the other document");
            writer::write_document(target, &a, indentation).await
        }
        (None, Some(b)) => {
            debug!(path = %path_a.display(), "empty merge input; copying the other document");
            writer::write_document(target, &b, indentation).await
        }
        // The first operand is the canonical representative when neither
        // side has content.
        (None, None) => Err(Error::new(ErrorKind::EmptyFile).with_path(path_a)),
    }
}

fn require_plain_object(content: &Value, path: &Path) -> ApiResult<()> {
    if validate::is_plain_object(content) {
        Ok(())
    } else {
        Err(Error::new(ErrorKind::NotAValidObject).with_path(path))
    }
}

async fn read_tolerating_empty(path: &Path) -> ApiResult<Option<Value>> {
    match reader::read_document(path).await {
        Ok(document) => Ok(Some(document)),
        Err(err) if err.kind() == ErrorKind::EmptyFile => Ok(None),
        Err(err) => Err(err),
    }
}
