//! Special character rule.

/// Characters accepted as "special", space included.
pub const SPECIAL_CHARACTERS: &str = " !@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

pub fn special_character_rule(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}
