// Error modeling shared by every operation: one closed kind enum, two
// disjoint categories. Domain kinds describe misuse or data shape and always
// carry the offending path; system kinds wrap an io::Error whose OS code is
// preserved through source().
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    NotAValidObject,
    EmptyFile,
    NotAJson,
    NotFound,
    Permission,
    Io,
}

impl ErrorKind {
    /// True for kinds raised by this crate's own policy, as opposed to
    /// failures surfaced from the operating system.
    pub fn is_domain(self) -> bool {
        matches!(
            self,
            ErrorKind::NotAValidObject | ErrorKind::EmptyFile | ErrorKind::NotAJson
        )
    }

    fn message(self) -> &'static str {
        match self {
            ErrorKind::NotAValidObject => "content is not a valid JSON object",
            ErrorKind::EmptyFile => "file is empty",
            ErrorKind::NotAJson => "file contains invalid JSON content",
            ErrorKind::NotFound => "file or directory not found",
            ErrorKind::Permission => "permission denied",
            ErrorKind::Io => "filesystem operation failed",
        }
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    path: Option<PathBuf>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            path: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Wraps a filesystem failure, keeping the io::Error (and with it the OS
    /// error code) reachable through `source()`.
    pub(crate) fn from_io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        Error::new(io_error_kind(&err))
            .with_path(path)
            .with_source(err)
    }
}

fn io_error_kind(err: &io::Error) -> ErrorKind {
    match err.kind() {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        io::ErrorKind::PermissionDenied => ErrorKind::Permission,
        _ => ErrorKind::Io,
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}
