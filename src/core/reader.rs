// Read path: load bytes, classify into exactly one of four outcomes.
// A file is either a JSON object document, empty, malformed, or unreadable;
// nothing is ever coerced from one bucket into another.
use std::path::Path;

use serde_json::Value;
use tokio::fs;

use crate::core::error::{Error, ErrorKind};
use crate::core::validate::is_plain_object;

/// Reads and decodes the JSON object stored at `path`.
///
/// Failure kinds are exactly: `NotFound`/`Permission`/`Io` when the bytes
/// cannot be read, `EmptyFile` for a zero-length file, `NotAJson` for
/// anything that is not a JSON document with an object at the top level.
pub async fn read_document(path: &Path) -> Result<Value, Error> {
    let bytes = fs::read(path)
        .await
        .map_err(|err| Error::from_io(err, path))?;
    // Lossy decode: bytes that are not UTF-8 cannot parse as JSON and fall
    // through to the NotAJson branch below.
    let text = String::from_utf8_lossy(&bytes);

    match serde_json::from_str::<Value>(&text) {
        Ok(document) if is_plain_object(&document) => Ok(document),
        _ if text.is_empty() => Err(Error::new(ErrorKind::EmptyFile).with_path(path)),
        _ => Err(Error::new(ErrorKind::NotAJson).with_path(path)),
    }
}
