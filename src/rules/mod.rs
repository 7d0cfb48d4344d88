//! Password rules
//!
//! Each rule is a pure predicate over the candidate string.

mod case;
mod digit;
mod length;
mod special;

pub use case::{lowercase_rule, uppercase_rule};
pub use digit::number_rule;
pub use length::{length_rule, MIN_LENGTH};
pub use special::{special_character_rule, SPECIAL_CHARACTERS};
