use once_cell::sync::Lazy;
use regex_lite::Regex;

static BTIH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"btih:([0-9a-fA-F]{40})(?:[^0-9a-fA-F]|$)").expect("btih pattern is valid")
});

/// Whether `value` is exactly 40 hex characters (either case).
pub fn is_valid_info_hash(value: &str) -> bool {
    value.len() == 40 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Pull the info hash out of a `btih:<40-hex>` reference such as a magnet URI.
///
/// The hash must be exactly 40 hex characters; a longer hex run is rejected
/// rather than truncated.
pub fn extract_info_hash(reference: &str) -> Option<&str> {
    BTIH_PATTERN
        .captures(reference)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Render a magnet URI for an info hash and display name.
pub fn magnet_uri(info_hash: &str, display_name: &str) -> String {
    format!(
        "magnet:?xt=urn:btih:{}&dn={}",
        info_hash,
        urlencoding::encode(display_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "41e6cd50ccec55cd5704c5e3d176e7b59317a3fb";

    #[test]
    fn test_valid_info_hash() {
        assert!(is_valid_info_hash(HASH));
        assert!(is_valid_info_hash(&HASH.to_uppercase()));
        assert!(!is_valid_info_hash(&HASH[..39]));
        assert!(!is_valid_info_hash(&format!("{}0", HASH)));
        assert!(!is_valid_info_hash("zze6cd50ccec55cd5704c5e3d176e7b59317a3fb"));
        assert!(!is_valid_info_hash(""));
    }

    #[test]
    fn test_extract_from_magnet() {
        let magnet = magnet_uri(HASH, "Movie Name 2020");
        assert_eq!(extract_info_hash(&magnet), Some(HASH));
    }

    #[test]
    fn test_extract_uppercase() {
        let upper = HASH.to_uppercase();
        let reference = format!("magnet:?xt=urn:btih:{}", upper);
        assert_eq!(extract_info_hash(&reference), Some(upper.as_str()));
    }

    #[test]
    fn test_extract_rejects_short_hash() {
        assert_eq!(extract_info_hash("magnet:?xt=urn:btih:abc123"), None);
        assert_eq!(extract_info_hash("no hash here"), None);
    }

    #[test]
    fn test_extract_rejects_overlong_hash() {
        let overlong = format!("{}00", HASH);
        assert_eq!(extract_info_hash(&magnet_uri(&overlong, "X")), None);
        assert_eq!(
            extract_info_hash(&format!("magnet:?xt=urn:btih:{}", overlong)),
            None
        );
        assert_eq!(
            extract_info_hash(&format!("magnet:?xt=urn:btih:{}", HASH)),
            Some(HASH)
        );
    }

    #[test]
    fn test_magnet_uri_encodes_name() {
        assert_eq!(
            magnet_uri(HASH, "A B&C"),
            format!("magnet:?xt=urn:btih:{}&dn=A%20B%26C", HASH)
        );
    }
}
