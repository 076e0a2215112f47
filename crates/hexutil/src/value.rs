//! Value string format checks.

/// Check that `value` is a non-empty string of ASCII digits (no sign, no
/// decimal point).
pub fn is_valid_decimal_value(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Check that `value` is a non-empty string of ASCII digits containing at
/// most one decimal point.
pub fn is_valid_value(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }

    let mut points = 0;
    for b in value.bytes() {
        match b {
            b'0'..=b'9' => {}
            b'.' => points += 1,
            _ => return false,
        }
    }
    points <= 1
}
