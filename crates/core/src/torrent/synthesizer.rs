use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use tracing::debug;

use super::magnet::{extract_info_hash, is_valid_info_hash};
use super::TorrentError;

/// Size of each piece: 256 KiB.
pub const PIECE_LENGTH: u64 = 262_144;
/// Nominal payload size: 1 GiB.
pub const TOTAL_LENGTH: u64 = 1_073_741_824;
/// Number of pieces covering the payload.
pub const NUM_PIECES: u64 = TOTAL_LENGTH.div_ceil(PIECE_LENGTH);

pub const ANNOUNCE_URL: &str = "udp://tracker.opentrackr.org:1337/announce";
pub const COMMENT: &str = "Created by Simple Torrent Server";
pub const CREATED_BY: &str = "Simple Torrent Server";

/// Top-level metainfo dictionary.
///
/// Bencode dictionaries are emitted with keys in byte order regardless of
/// field order here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaInfo {
    pub announce: String,
    #[serde(rename = "announce-list")]
    pub announce_list: Vec<Vec<String>>,
    pub comment: String,
    #[serde(rename = "created by")]
    pub created_by: String,
    #[serde(rename = "creation date")]
    pub creation_date: i64,
    pub info: Info,
}

/// Single-file `info` dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    #[serde(with = "serde_bytes")]
    pub name: Vec<u8>,
    #[serde(rename = "piece length")]
    pub piece_length: u64,
    #[serde(with = "serde_bytes")]
    pub pieces: Vec<u8>,
    pub private: u8,
    pub length: u64,
}

/// Everything needed to emit one placeholder torrent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentDescriptor {
    pub display_name: String,
    pub info_hash: String,
    pub piece_length: u64,
    pub total_length: u64,
    pub piece_hashes: Vec<[u8; 20]>,
    pub announce_url: String,
    pub created_at: DateTime<Utc>,
}

/// Derive the placeholder piece hashes for an info hash.
///
/// Piece `i` is `SHA1(info_hash_ascii || decimal(i))`, hashing the hex text
/// as given rather than its decoded bytes.
pub fn piece_hashes(info_hash: &str) -> Vec<[u8; 20]> {
    (0..NUM_PIECES)
        .map(|index| {
            let mut hasher = Sha1::new();
            hasher.update(info_hash.as_bytes());
            hasher.update(index.to_string().as_bytes());

            let mut digest = [0u8; 20];
            digest.copy_from_slice(&hasher.finalize());
            digest
        })
        .collect()
}

impl TorrentDescriptor {
    /// Build a descriptor, rejecting anything but a 40-hex info hash.
    pub fn new(
        display_name: &str,
        info_hash: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Self, TorrentError> {
        if !is_valid_info_hash(info_hash) {
            return Err(TorrentError::InvalidInfoHash(info_hash.to_string()));
        }

        Ok(Self {
            display_name: display_name.to_string(),
            info_hash: info_hash.to_string(),
            piece_length: PIECE_LENGTH,
            total_length: TOTAL_LENGTH,
            piece_hashes: piece_hashes(info_hash),
            announce_url: ANNOUNCE_URL.to_string(),
            created_at,
        })
    }

    pub fn num_pieces(&self) -> usize {
        self.piece_hashes.len()
    }

    /// All piece hashes concatenated in index order.
    pub fn pieces_blob(&self) -> Vec<u8> {
        self.piece_hashes.concat()
    }

    pub fn to_metainfo(&self) -> MetaInfo {
        MetaInfo {
            announce: self.announce_url.clone(),
            announce_list: vec![vec![self.announce_url.clone()]],
            comment: COMMENT.to_string(),
            created_by: CREATED_BY.to_string(),
            creation_date: self.created_at.timestamp(),
            info: Info {
                name: self.display_name.as_bytes().to_vec(),
                piece_length: self.piece_length,
                pieces: self.pieces_blob(),
                private: 1,
                length: self.total_length,
            },
        }
    }

    /// Bencode the metainfo.
    pub fn encode(&self) -> Result<Vec<u8>, TorrentError> {
        Ok(serde_bencode::to_bytes(&self.to_metainfo())?)
    }
}

/// Synthesize torrent bytes stamped with the current time.
pub fn synthesize(display_name: &str, info_hash: &str) -> Result<Vec<u8>, TorrentError> {
    synthesize_at(display_name, info_hash, Utc::now())
}

/// Synthesize torrent bytes with an explicit creation time.
pub fn synthesize_at(
    display_name: &str,
    info_hash: &str,
    created_at: DateTime<Utc>,
) -> Result<Vec<u8>, TorrentError> {
    debug!(name = display_name, info_hash, "Synthesizing torrent");
    TorrentDescriptor::new(display_name, info_hash, created_at)?.encode()
}

/// Synthesize from a reference containing `btih:<40-hex>`, such as a magnet URI.
pub fn synthesize_from_magnet(
    display_name: &str,
    reference: &str,
    created_at: DateTime<Utc>,
) -> Result<Vec<u8>, TorrentError> {
    let info_hash = extract_info_hash(reference)
        .ok_or_else(|| TorrentError::InvalidMagnet(reference.to_string()))?;
    synthesize_at(display_name, info_hash, created_at)
}
