//! Placeholder torrent metadata.
//!
//! Builds a complete single-file `.torrent` for a display name and an info
//! hash. The piece hashes are derived from the info hash alone, so the same
//! inputs always produce the same `info` dictionary; only `creation date`
//! follows the clock.

mod magnet;
mod synthesizer;

pub use magnet::{extract_info_hash, is_valid_info_hash, magnet_uri};
pub use synthesizer::{
    piece_hashes, synthesize, synthesize_at, synthesize_from_magnet, Info, MetaInfo,
    TorrentDescriptor, ANNOUNCE_URL, COMMENT, CREATED_BY, NUM_PIECES, PIECE_LENGTH, TOTAL_LENGTH,
};

use thiserror::Error;

/// Errors that can occur while synthesizing torrent metadata.
#[derive(Debug, Error)]
pub enum TorrentError {
    #[error("Invalid info hash: {0}")]
    InvalidInfoHash(String),

    #[error("Invalid magnet link format: {0}")]
    InvalidMagnet(String),

    #[error("Failed to encode torrent: {0}")]
    Encode(#[from] serde_bencode::Error),
}
