//! Number rule.

pub fn number_rule(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}
