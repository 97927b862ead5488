// Write path: serialize with the requested indentation, make sure every
// ancestor directory exists, then create-or-truncate the file. No atomic
// replace and no locking; a concurrent writer between the existence check
// and the write is the caller's problem.
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tokio::fs;
use tracing::debug;

use crate::core::error::{Error, ErrorKind};

const MAX_INDENT: usize = 10;

/// Pretty-printing width for written documents. Level 0 produces compact
/// single-line output; levels above 10 are clamped to 10. Defaults to 2.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Indentation(usize);

impl Indentation {
    pub fn new(level: usize) -> Self {
        Self(level)
    }

    pub fn level(self) -> usize {
        self.0
    }
}

impl Default for Indentation {
    fn default() -> Self {
        Self(2)
    }
}

impl From<usize> for Indentation {
    fn from(level: usize) -> Self {
        Self(level)
    }
}

/// Serializes `document` and writes it to `path`, creating missing ancestor
/// directories first. An existing file is fully replaced.
pub async fn write_document(
    path: &Path,
    document: &Value,
    indentation: Indentation,
) -> Result<(), Error> {
    let bytes = serialize(document, indentation)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !directory_exists(parent).await? {
            debug!(path = %parent.display(), "creating missing ancestor directories");
            fs::create_dir_all(parent)
                .await
                .map_err(|err| Error::from_io(err, parent))?;
        }
    }

    fs::write(path, bytes)
        .await
        .map_err(|err| Error::from_io(err, path))
}

/// Existence probe for the parent directory. NotFound maps to `false`; any
/// other failure (permissions, I/O) propagates untouched instead of being
/// treated as "missing".
async fn directory_exists(path: &Path) -> Result<bool, Error> {
    match fs::metadata(path).await {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(Error::from_io(err, path)),
    }
}

fn serialize(document: &Value, indentation: Indentation) -> Result<Vec<u8>, Error> {
    if indentation.level() == 0 {
        return serde_json::to_vec(document)
            .map_err(|err| Error::new(ErrorKind::Io).with_source(err));
    }

    let indent = vec![b' '; indentation.level().min(MAX_INDENT)];
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|err| Error::new(ErrorKind::Io).with_source(err))?;
    Ok(out)
}
