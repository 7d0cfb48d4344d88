//! Password strength meter library
//!
//! This library checks a password against five fixed rules (length,
//! uppercase, lowercase, special character, digit), derives a
//! Weak / Medium / Strong tier from them, and models the password input
//! field that displays the result.
//!
//! # Features
//!
//! - `async` (default): Enables the tokio-driven notice dismiss timer
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_NOTICE_DURATION_MS`: Lifetime of the blocked-clipboard notice
//!   (default: `1400`)
//! - `PWD_NOTICE_MESSAGE`: Text of that notice
//! - `PWD_MASK_CHAR`: Mask character while the password is hidden
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{evaluate, FieldConfig, PasswordField, StrengthTier};
//!
//! let evaluation = evaluate("Ab1!defg");
//! assert_eq!(evaluation.tier, StrengthTier::Strong);
//! assert_eq!(evaluation.percentage, "100%");
//!
//! let mut field = PasswordField::new(FieldConfig::from_env().expect("Invalid field config"));
//! field.on_input("  Abcdefg1 ");
//!
//! for row in field.checklist() {
//!     println!("[{}] {}", if row.satisfied { "x" } else { " " }, row.label);
//! }
//! if let Some(view) = field.strength_view() {
//!     println!("Strength: {} ({})", view.tier, view.width);
//! }
//! ```

// Internal modules
mod config;
mod evaluator;
mod field;
mod rules;
mod types;

// Public API
pub use config::{ConfigError, FieldConfig};
pub use evaluator::{derive_flags, evaluate, evaluate_password_strength};
pub use field::{
    ChecklistItem, ClipboardAction, ClipboardOutcome, Instant, Notice, NoticeEvent, NoticeId,
    NoticeStack, PasswordField, StrengthView, Visibility,
};
pub use rules::{MIN_LENGTH, SPECIAL_CHARACTERS};
pub use types::{PasswordEvaluation, Rule, RuleFlags, StrengthTier, RULE_COUNT};

#[cfg(feature = "async")]
pub use field::dismiss_notice_after;
