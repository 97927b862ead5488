//! Purpose: Async create/read/overwrite/merge operations for JSON documents
//! stored as individual files.
//! Exports: `api` (operations, `Error`, `ErrorKind`, `Indentation`), with the
//! same names re-exported at the crate root.
//! Role: Library for callers treating JSON files as lightweight persisted
//! configuration or state; no CLI or service surface.
//! Invariants: Paths are expected to be absolute; the crate does not resolve
//! relative paths.
//! Invariants: A managed file's top-level value is always a plain JSON
//! object, never an array or primitive.
//! Invariants: No locking and no cross-file transactions; each call assumes
//! exclusive access to its target for the duration of the call.
mod core;

pub mod api;

pub use api::{
    ApiResult, Error, ErrorKind, Indentation, deep_merge, is_plain_object,
    is_valid_json_object_str, join, merge, overwrite, read,
};
