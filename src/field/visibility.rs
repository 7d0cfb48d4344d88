//! Visibility toggle - masked or plain rendering of the field.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Characters are replaced by the mask (initial state).
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Shown,
            Visibility::Shown => Visibility::Hidden,
        }
    }

    pub fn is_hidden(self) -> bool {
        self == Visibility::Hidden
    }

    /// HTML-style input type for this state.
    pub fn input_type(self) -> &'static str {
        match self {
            Visibility::Hidden => "password",
            Visibility::Shown => "text",
        }
    }

    /// Text to draw for `value` in this state.
    pub fn render(self, value: &str, mask_char: char) -> String {
        match self {
            Visibility::Hidden => mask_char.to_string().repeat(value.chars().count()),
            Visibility::Shown => value.to_string(),
        }
    }
}
