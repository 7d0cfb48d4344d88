//! Case rules - ASCII uppercase and lowercase letters.

pub fn uppercase_rule(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn lowercase_rule(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}
