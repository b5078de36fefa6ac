//! Phone number canonicalization for directory lookups.
//!
//! Canonical policy: normalization runs **at submit time only**. All
//! non-digit characters are stripped, the result is capped at ten digits,
//! and a leading `0` is prepended only when the capped result is exactly
//! nine digits (local numbers typed without the trunk zero). The function
//! is pure and idempotent; tests pin the policy down.

/// Minimum digit count that enables the lookup action.
pub const MIN_DIGITS: usize = 9;

/// Maximum digit count kept after normalization; extra trailing digits are
/// dropped silently.
pub const MAX_DIGITS: usize = 10;

/// Canonicalizes user-typed phone input into the directory lookup key.
pub fn normalize(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.truncate(MAX_DIGITS);

    if digits.len() == MIN_DIGITS && !digits.starts_with('0') {
        digits.insert(0, '0');
    }

    digits
}

/// Returns true when the input has enough digits to submit a lookup.
/// This is the only client-side format check; everything else is the
/// directory's call.
pub fn is_submittable(raw: &str) -> bool {
    let count = raw.chars().filter(|c| c.is_ascii_digit()).count();
    (MIN_DIGITS..=MAX_DIGITS).contains(&count)
}
