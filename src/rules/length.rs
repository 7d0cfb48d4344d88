//! Length rule - checks password minimum length.

pub const MIN_LENGTH: usize = 8;

/// Returns `true` if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is counted in UTF-16 code units, the way browser input fields
/// report it: characters outside the BMP count as two.
pub fn length_rule(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_LENGTH
}
