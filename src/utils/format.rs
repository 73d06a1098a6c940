/// Render a 12-digit identifier as `nnnn nnnn nnnn`.
/// Anything that is not exactly 12 digits is returned unchanged.
pub fn format_uid(digits: &str) -> String {
    if digits.len() != 12 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }
    format!("{} {} {}", &digits[0..4], &digits[4..8], &digits[8..12])
}

/// Reduce an identifier in any spacing to its bare digits.
pub fn strip_uid(uid: &str) -> String {
    uid.chars().filter(|c| c.is_ascii_digit()).collect()
}
