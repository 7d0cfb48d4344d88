//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::rules::{
    length_rule, lowercase_rule, number_rule, special_character_rule, uppercase_rule,
};
use crate::types::{PasswordEvaluation, RuleFlags};

/// Evaluates a plain string against every rule.
///
/// All five rules always run; nothing short-circuits. Any input is valid,
/// the empty string included.
pub fn evaluate(password: &str) -> PasswordEvaluation {
    let flags = derive_flags(password);
    let evaluation = PasswordEvaluation::from_flags(flags);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        satisfied = evaluation.satisfied_count,
        tier = %evaluation.tier,
        missing = ?flags.missing(),
        "password evaluated"
    );

    evaluation
}

/// Evaluates a secret password.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordEvaluation` with the rule flags and derived score.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    evaluate(password.expose_secret())
}

/// Computes the five rule flags for `password`.
pub fn derive_flags(password: &str) -> RuleFlags {
    RuleFlags {
        has_valid_length: length_rule(password),
        has_uppercase: uppercase_rule(password),
        has_lowercase: lowercase_rule(password),
        has_special_character: special_character_rule(password),
        has_number: number_rule(password),
    }
}
