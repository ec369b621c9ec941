//! This library provides:
//! - PathValue: A wrapper around a decoded JSON value which resolves backslash separated key paths
//!   like `test\goes\deep`, asserts the kind of the value found and casts it to another kind
//! - JsonPath: The path tokenizer, which keeps a backslash that starts a JSON escape sequence as part of the key
//!
//! Note: Only object keys are navigable, so wildcards, array indexes, slices and filters are not supported.
//!
//! A `PathValue` owns its value and never mutates it, so it is `Send` and `Sync` and can be read from several threads.

mod error;
mod json_kind;
mod json_path;
mod json_source;
mod path_value;

pub use crate::error::{Error, Result};
pub use crate::json_kind::Kind;
pub use crate::json_path::{JsonPath, split_path, DELIMITER, ESCAPE_INDICATORS};
pub use crate::path_value::{OrDefault, PathValue};
