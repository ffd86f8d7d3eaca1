//! Request, response and error types for file generation.

use std::fmt;

use thiserror::Error;

use crate::matcher::MatchError;
use crate::media::ParseError;
use crate::torrent::TorrentError;

/// Kind of descriptor file that can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Torrent,
    Nzb,
}

impl FileKind {
    /// Match a file extension, ignoring case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("torrent") {
            Some(FileKind::Torrent)
        } else if extension.eq_ignore_ascii_case("nzb") {
            Some(FileKind::Nzb)
        } else {
            None
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Torrent => "torrent",
            FileKind::Nzb => "nzb",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            FileKind::Torrent => "application/x-bittorrent",
            FileKind::Nzb => "application/x-nzb",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A requested `{name}.{ext}` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRequest {
    pub name: String,
    pub kind: FileKind,
}

impl FileRequest {
    pub fn new(name: &str, kind: FileKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }

    /// Split a requested file name at its last `.` into name and kind.
    pub fn parse(file: &str) -> Result<Self, GenerateError> {
        let Some((name, extension)) = file.rsplit_once('.') else {
            return Err(GenerateError::UnsupportedFileType(String::new()));
        };

        let kind = FileKind::from_extension(extension)
            .ok_or_else(|| GenerateError::UnsupportedFileType(extension.to_string()))?;

        if name.trim().is_empty() {
            return Err(GenerateError::InvalidRequest(format!(
                "missing file name in '{}'",
                file
            )));
        }

        Ok(Self::new(name, kind))
    }
}

/// A generated file ready to be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl GeneratedFile {
    /// `attachment` disposition; quotes, backslashes and control characters
    /// in the name are replaced with `_` so the header stays well formed.
    pub fn content_disposition(&self) -> String {
        let file_name: String = self
            .file_name
            .chars()
            .map(|c| {
                if c == '"' || c == '\\' || c.is_control() {
                    '_'
                } else {
                    c
                }
            })
            .collect();
        format!("attachment; filename=\"{}\"", file_name)
    }
}

/// Errors that abort a generation request.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Unsupported file type: '{0}'")]
    UnsupportedFileType(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Metadata parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Torrent(#[from] TorrentError),
}

impl GenerateError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            GenerateError::UnsupportedFileType(_) | GenerateError::InvalidRequest(_) => 400,
            GenerateError::Torrent(TorrentError::InvalidInfoHash(_))
            | GenerateError::Torrent(TorrentError::InvalidMagnet(_)) => 400,
            GenerateError::Match(MatchError::Unrecognized(_)) => 404,
            GenerateError::Parse(_)
            | GenerateError::Match(_)
            | GenerateError::Torrent(TorrentError::Encode(_)) => 500,
        }
    }

    /// Short label for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            GenerateError::UnsupportedFileType(_) => "unsupported_file_type",
            GenerateError::InvalidRequest(_) => "invalid_request",
            GenerateError::Parse(_) => "parse_failed",
            GenerateError::Match(MatchError::InvalidParse(_)) => "invalid_parse",
            GenerateError::Match(MatchError::Unrecognized(_)) => "unrecognized",
            GenerateError::Match(MatchError::Search(_)) => "search_failed",
            GenerateError::Torrent(TorrentError::Encode(_)) => "encode_failed",
            GenerateError::Torrent(_) => "invalid_info_hash",
        }
    }
}
