// Core modules implementing validation, classification, merging, and error
// modeling.
pub mod error;
pub mod merge;
pub mod reader;
pub mod validate;
pub mod writer;
