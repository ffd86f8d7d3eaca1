//! Sequence similarity based on longest common matching blocks.
//!
//! The ratio is `2 * M / T` where `T` is the combined length of both strings
//! and `M` the number of characters covered by matching blocks, found by
//! taking the longest common block and recursing on both sides of it.

/// Similarity ratio in `[0, 1]` between two strings.
///
/// 1.0 for identical strings (including two empty ones), 0.0 when they share
/// no character.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    // Block tie-breaking depends on argument order; taking the larger of both
    // directions keeps the ratio symmetric.
    let matches = matching_characters(&a, &b).max(matching_characters(&b, &a));
    2.0 * matches as f64 / total as f64
}

fn matching_characters(a: &[char], b: &[char]) -> usize {
    let (i, j, size) = longest_common_block(a, b);
    if size == 0 {
        return 0;
    }

    size + matching_characters(&a[..i], &b[..j])
        + matching_characters(&a[i + size..], &b[j + size..])
}

/// Longest common contiguous block as `(start_a, start_b, len)`.
///
/// Ties resolve to the earliest start in `a`, then in `b`.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        for (j, cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };

            let len = current[j + 1];
            if len > best.2 {
                best = (i + 1 - len, j + 1 - len, len);
            }
        }
        std::mem::swap(&mut prev, &mut current);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identical_strings() {
        assert!(approx(similarity("show s01e02 1080p", "show s01e02 1080p"), 1.0));
        assert!(approx(similarity("x", "x"), 1.0));
        assert!(approx(similarity("", ""), 1.0));
    }

    #[test]
    fn test_no_overlap() {
        assert!(approx(similarity("abc", "xyz"), 0.0));
        assert!(approx(similarity("abc", ""), 0.0));
    }

    #[test]
    fn test_known_ratios() {
        // "abcd" vs "bcde": block "bcd" -> 2 * 3 / 8
        assert!(approx(similarity("abcd", "bcde"), 0.75));
        // "abxcd" vs "abcd": blocks "ab" and "cd" -> 2 * 4 / 9
        assert!(approx(similarity("abxcd", "abcd"), 8.0 / 9.0));
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("movie name 2020 1080p", "movie name 2020 720p"),
            ("the show s01e02", "show the s01e02"),
            ("abab", "baba"),
            ("unrelated", "show s01e02 1080p"),
        ];
        for (a, b) in pairs {
            assert!(approx(similarity(a, b), similarity(b, a)), "{:?} / {:?}", a, b);
        }
    }

    #[test]
    fn test_bounded() {
        let score = similarity("movie name 2020", "movie name 2021 remastered");
        assert!(score > 0.0 && score < 1.0);
    }

    #[test]
    fn test_closer_titles_score_higher() {
        let target = "movie name 2020 1080p";
        let close = similarity(target, "movie name 2020 1080p bluray");
        let far = similarity(target, "other film 1999 480p");
        assert!(close > far);
        assert!(close >= 0.8);
    }
}
