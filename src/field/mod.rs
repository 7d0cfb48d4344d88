//! Headless password field
//!
//! [`PasswordField`] owns the candidate password, the visibility state and
//! the notice stack. Every mutation of the password re-runs the evaluator
//! before returning, so the stored evaluation never lags the text.

mod checklist;
mod guard;
mod visibility;

pub use checklist::{checklist, strength_view, ChecklistItem, StrengthView};
pub use guard::{
    ClipboardAction, ClipboardOutcome, Instant, Notice, NoticeEvent, NoticeId, NoticeStack,
};
pub use visibility::Visibility;

#[cfg(feature = "async")]
pub use guard::dismiss_notice_after;

use secrecy::{ExposeSecret, SecretString};

use crate::config::FieldConfig;
use crate::evaluator::evaluate;
use crate::types::PasswordEvaluation;

#[derive(Debug)]
pub struct PasswordField {
    config: FieldConfig,
    password: SecretString,
    evaluation: PasswordEvaluation,
    visibility: Visibility,
    notices: NoticeStack,
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl PasswordField {
    /// Creates an empty, hidden field.
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            password: SecretString::new(String::new().into()),
            evaluation: PasswordEvaluation::default(),
            visibility: Visibility::Hidden,
            notices: NoticeStack::default(),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn is_empty(&self) -> bool {
        self.password.expose_secret().is_empty()
    }

    pub fn evaluation(&self) -> &PasswordEvaluation {
        &self.evaluation
    }

    /// Replaces the password with `raw` trimmed of surrounding whitespace.
    pub fn on_input(&mut self, raw: &str) -> &PasswordEvaluation {
        self.password = SecretString::new(trim_input(raw).to_string().into());
        self.evaluation = evaluate(self.password.expose_secret());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            satisfied = self.evaluation.satisfied_count,
            tier = %self.evaluation.tier,
            "password field updated"
        );

        &self.evaluation
    }

    /// Handles a copy, cut or paste attempt. The password is never touched.
    pub fn on_clipboard(&mut self, action: ClipboardAction, now: Instant) -> ClipboardOutcome {
        let id = self.notices.push(
            action,
            &self.config.notice_message,
            self.config.notice_duration,
            now,
        );

        #[cfg(feature = "tracing")]
        tracing::warn!(%action, notice = id.0, "clipboard action blocked");

        ClipboardOutcome::Blocked(id)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn toggle_visibility(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        self.visibility
    }

    pub fn input_type(&self) -> &'static str {
        self.visibility.input_type()
    }

    /// Text to draw inside the input box.
    pub fn display_value(&self) -> String {
        self.visibility
            .render(self.password.expose_secret(), self.config.mask_char)
    }

    pub fn checklist(&self) -> [ChecklistItem; 4] {
        checklist(&self.evaluation.flags)
    }

    /// `None` while the password is empty.
    pub fn strength_view(&self) -> Option<StrengthView> {
        strength_view(self.password.expose_secret(), &self.evaluation)
    }

    pub fn active_notices(&self, now: Instant) -> Vec<&Notice> {
        self.notices.active(now).collect()
    }

    pub fn prune_notices(&mut self, now: Instant) -> usize {
        self.notices.prune(now)
    }

    pub fn dismiss_notice(&mut self, id: NoticeId) -> bool {
        self.notices.dismiss(id)
    }

    /// Applies an event produced by the dismiss timer.
    pub fn apply_notice_event(&mut self, event: NoticeEvent) -> bool {
        match event {
            NoticeEvent::Dismissed(id) => self.dismiss_notice(id),
        }
    }
}

/// Trims the whitespace and line terminators a browser's `String.trim`
/// strips: Rust's White_Space set plus U+FEFF, minus U+0085.
fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c == '\u{FEFF}' || (c != '\u{85}' && c.is_whitespace()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StrengthTier;
    use std::time::Duration;

    #[test]
    fn test_new_field_is_empty_and_hidden() {
        let field = PasswordField::default();

        assert!(field.is_empty());
        assert_eq!(field.visibility(), Visibility::Hidden);
        assert_eq!(field.evaluation().satisfied_count, 0);
        assert_eq!(field.strength_view(), None);
        assert!(field.checklist().iter().all(|row| !row.satisfied));
    }

    #[test]
    fn test_input_is_trimmed() {
        let mut field = PasswordField::default();
        field.on_input("  abc def \t\n");

        assert_eq!(field.password().expose_secret(), "abc def");
        assert!(field.evaluation().flags.has_special_character);
    }

    #[test]
    fn test_input_trim_matches_browser_whitespace() {
        let mut field = PasswordField::default();

        field.on_input("\u{FEFF}abc\u{FEFF}");
        assert_eq!(field.password().expose_secret(), "abc");

        field.on_input("\u{A0}\u{2028}abc\u{3000}");
        assert_eq!(field.password().expose_secret(), "abc");

        field.on_input("\u{85}abc\u{85}");
        assert_eq!(field.password().expose_secret(), "\u{85}abc\u{85}");
    }

    #[test]
    fn test_surrounding_spaces_do_not_count_as_special() {
        let mut field = PasswordField::default();
        let evaluation = field.on_input("   abcdefgh   ");

        assert!(!evaluation.flags.has_special_character);
        assert_eq!(evaluation.tier, StrengthTier::Weak);
    }

    #[test]
    fn test_evaluation_tracks_every_input() {
        let mut field = PasswordField::default();
        for text in ["A", "Ab", "Ab1", "Ab1!", "Ab1!defg", "Ab1", ""] {
            field.on_input(text);
            assert_eq!(field.evaluation(), &evaluate(text), "after {:?}", text);
        }
        assert_eq!(field.strength_view(), None);
    }

    #[test]
    fn test_strength_view_follows_tier() {
        let mut field = PasswordField::default();

        field.on_input("Abcdefg1");
        let view = field.strength_view().unwrap();
        assert_eq!(view.tier, StrengthTier::Medium);
        assert_eq!(view.width, "80%");

        field.on_input("Ab1!defg");
        assert_eq!(field.strength_view().unwrap().tier, StrengthTier::Strong);
    }

    #[test]
    fn test_toggle_does_not_touch_password() {
        let mut field = PasswordField::new(FieldConfig::default().with_mask_char('*'));
        field.on_input("Secret1!");
        let before = field.evaluation().clone();

        assert_eq!(field.display_value(), "********");
        assert_eq!(field.input_type(), "password");

        assert_eq!(field.toggle_visibility(), Visibility::Shown);
        assert_eq!(field.display_value(), "Secret1!");
        assert_eq!(field.input_type(), "text");
        assert_eq!(field.evaluation(), &before);

        assert_eq!(field.toggle_visibility(), Visibility::Hidden);
        assert_eq!(field.password().expose_secret(), "Secret1!");
    }

    #[test]
    fn test_clipboard_is_always_blocked() {
        let mut field = PasswordField::default();
        field.on_input("Abcdefg1");
        let now = Instant::now();

        for action in [ClipboardAction::Copy, ClipboardAction::Cut, ClipboardAction::Paste] {
            assert!(matches!(field.on_clipboard(action, now), ClipboardOutcome::Blocked(_)));
        }

        assert_eq!(field.password().expose_secret(), "Abcdefg1");
        let notices = field.active_notices(now);
        assert_eq!(notices.len(), 3);
        assert!(notices.iter().all(|n| n.message == "copy pasting is not allowed🎃"));
        assert_eq!(notices[1].action, ClipboardAction::Cut);
    }

    #[test]
    fn test_notice_auto_dismisses_after_configured_duration() {
        let config = FieldConfig::default().with_notice_duration(Duration::from_millis(500));
        let mut field = PasswordField::new(config);
        let t0 = Instant::now();
        field.on_clipboard(ClipboardAction::Paste, t0);

        assert_eq!(field.active_notices(t0 + Duration::from_millis(499)).len(), 1);
        assert!(field.active_notices(t0 + Duration::from_millis(500)).is_empty());
        assert_eq!(field.prune_notices(t0 + Duration::from_millis(500)), 1);
    }

    #[test]
    fn test_stale_dismissal_keeps_newer_notice() {
        let mut field = PasswordField::default();
        let now = Instant::now();
        let ClipboardOutcome::Blocked(first) = field.on_clipboard(ClipboardAction::Copy, now);
        let ClipboardOutcome::Blocked(second) = field.on_clipboard(ClipboardAction::Copy, now);

        assert!(field.apply_notice_event(NoticeEvent::Dismissed(first)));
        assert!(!field.apply_notice_event(NoticeEvent::Dismissed(first)));

        let remaining: Vec<_> = field.active_notices(now).iter().map(|n| n.id).collect();
        assert_eq!(remaining, vec![second]);
    }
}
