//! Evaluation result types.

use std::fmt;

/// Number of rules a password is checked against.
pub const RULE_COUNT: usize = 5;

/// The five independent composition checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleFlags {
    pub has_valid_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_special_character: bool,
    pub has_number: bool,
}

/// Identifies a single rule, mostly for reporting which ones are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    ValidLength,
    Uppercase,
    Lowercase,
    SpecialCharacter,
    Number,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::ValidLength => "length",
            Rule::Uppercase => "uppercase",
            Rule::Lowercase => "lowercase",
            Rule::SpecialCharacter => "special characters",
            Rule::Number => "numbers",
        }
    }
}

impl RuleFlags {
    fn as_array(&self) -> [(Rule, bool); RULE_COUNT] {
        [
            (Rule::ValidLength, self.has_valid_length),
            (Rule::Uppercase, self.has_uppercase),
            (Rule::Lowercase, self.has_lowercase),
            (Rule::SpecialCharacter, self.has_special_character),
            (Rule::Number, self.has_number),
        ]
    }

    /// Number of flags that are `true` (0..=5).
    pub fn satisfied_count(&self) -> usize {
        self.as_array().iter().filter(|(_, ok)| *ok).count()
    }

    /// Rules that are not satisfied, in declaration order.
    pub fn missing(&self) -> Vec<Rule> {
        self.as_array()
            .into_iter()
            .filter_map(|(rule, ok)| (!ok).then_some(rule))
            .collect()
    }
}

/// Qualitative strength tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Strong only when every rule holds, Medium from three rules up.
    pub fn from_count(satisfied_count: usize) -> Self {
        if satisfied_count == RULE_COUNT {
            StrengthTier::Strong
        } else if satisfied_count >= 3 {
            StrengthTier::Medium
        } else {
            StrengthTier::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full result of evaluating a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub flags: RuleFlags,
    pub satisfied_count: usize,
    /// Share of satisfied rules, formatted as e.g. `"60%"`.
    pub percentage: String,
    pub tier: StrengthTier,
}

impl PasswordEvaluation {
    pub fn from_flags(flags: RuleFlags) -> Self {
        let satisfied_count = flags.satisfied_count();
        Self {
            flags,
            satisfied_count,
            percentage: format!("{}%", percentage_of(satisfied_count)),
            tier: StrengthTier::from_count(satisfied_count),
        }
    }

    /// Numeric form of [`Self::percentage`].
    pub fn percentage_value(&self) -> u8 {
        percentage_of(self.satisfied_count)
    }
}

impl Default for PasswordEvaluation {
    fn default() -> Self {
        Self::from_flags(RuleFlags::default())
    }
}

fn percentage_of(satisfied_count: usize) -> u8 {
    (satisfied_count.min(RULE_COUNT) * 100 / RULE_COUNT) as u8
}
