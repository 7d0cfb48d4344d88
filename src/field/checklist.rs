//! Checklist and strength bar view models.

use crate::types::{PasswordEvaluation, RuleFlags, StrengthTier};

/// One row of the "your password must have" checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    pub label: &'static str,
    pub satisfied: bool,
}

pub const LENGTH_LABEL: &str = "8 or more characters";
pub const CASE_LABEL: &str = "Upper & lowercase letters";
pub const SPECIAL_LABEL: &str = "1 special characters (! @ # $ % ^ & *)";
pub const NUMBER_LABEL: &str = "At least one number";

/// Builds the four checklist rows. Upper and lower case share one row.
pub fn checklist(flags: &RuleFlags) -> [ChecklistItem; 4] {
    [
        ChecklistItem {
            label: LENGTH_LABEL,
            satisfied: flags.has_valid_length,
        },
        ChecklistItem {
            label: CASE_LABEL,
            satisfied: flags.has_uppercase && flags.has_lowercase,
        },
        ChecklistItem {
            label: SPECIAL_LABEL,
            satisfied: flags.has_special_character,
        },
        ChecklistItem {
            label: NUMBER_LABEL,
            satisfied: flags.has_number,
        },
    ]
}

/// What the strength bar shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthView {
    pub tier: StrengthTier,
    /// Bar width, e.g. `"60%"`.
    pub width: String,
}

/// Strength bar for `evaluation`, hidden entirely while the password is empty.
pub fn strength_view(password: &str, evaluation: &PasswordEvaluation) -> Option<StrengthView> {
    if password.is_empty() {
        return None;
    }
    Some(StrengthView {
        tier: evaluation.tier,
        width: evaluation.percentage.clone(),
    })
}
