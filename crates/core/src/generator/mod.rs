//! Request orchestration.
//!
//! `ReleaseGenerator` drives one file request end to end: parse the release
//! name, search and match a release, then synthesize the file body.

mod service;
mod types;

pub use service::{Clock, ReleaseGenerator};
pub use types::{FileKind, FileRequest, GenerateError, GeneratedFile};
