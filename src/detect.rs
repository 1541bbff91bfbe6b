//! Binary-likeness heuristic for auto-detection

use crate::codec::is_separator;

/// Default fraction of non-separator characters that must be binary digits
pub const DEFAULT_THRESHOLD: f64 = 0.9;

/// Heuristic: does this input look like a binary string?
///
/// Uses [`DEFAULT_THRESHOLD`]. See [`looks_like_binary_with_threshold`].
pub fn looks_like_binary(s: &str) -> bool {
    looks_like_binary_with_threshold(s, DEFAULT_THRESHOLD)
}

/// Heuristic: treat input as binary if at least `threshold` of its
/// non-separator characters are `0` or `1`
///
/// This is a permissive majority vote used only for auto-detection, not a
/// validator: it ignores group lengths entirely, counts invalid characters
/// toward the denominator, and will happily misclassify short numeric text
/// such as "101101". Empty input and separator-only input are not binary.
pub fn looks_like_binary_with_threshold(s: &str, threshold: f64) -> bool {
    if s.is_empty() {
        return false;
    }
    let total = s.chars().filter(|&ch| !is_separator(ch)).count();
    if total == 0 {
        return false;
    }
    let ones_zeros = s.chars().filter(|&ch| ch == '0' || ch == '1').count();
    ones_zeros as f64 / total as f64 >= threshold
}
