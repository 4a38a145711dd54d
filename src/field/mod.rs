mod config;

pub use config::FieldConfig;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::binding::ValidityBinding;
use crate::validate::{ValidationOutcome, mandatory_check};

/// Single-line text input with a floating label and on-change validation.
///
/// The field owns its text buffer. Every mutation runs one validation pass
/// over the new text, so the stored error always reflects the current value;
/// a field is valid exactly when no error message is held. Construction
/// counts as the first text change, so a mandatory empty field starts
/// invalid.
#[derive(Debug, Clone)]
pub struct FloatingField {
    config: FieldConfig,
    text: String,
    error: Option<String>,
    dirty: bool,
    validity: Option<ValidityBinding>,
}

impl FloatingField {
    pub fn new(config: FieldConfig) -> Self {
        let mut field = Self {
            config,
            text: String::new(),
            error: None,
            dirty: false,
            validity: None,
        };
        field.revalidate();
        field
    }

    /// Seeds initial text without marking the field dirty.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.revalidate();
        self
    }

    /// Binds the validity cell and immediately mirrors the current state
    /// into it.
    pub fn with_validity(mut self, binding: ValidityBinding) -> Self {
        binding.set(self.error.is_none());
        self.validity = Some(binding);
        self
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn title(&self) -> &str {
        self.config.title()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.after_edit();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.push(c);
        self.after_edit();
    }

    pub fn backspace(&mut self) {
        self.text.pop();
        self.after_edit();
    }

    /// The clear affordance: equivalent to `set_text("")`.
    pub fn clear(&mut self) {
        self.text.clear();
        self.after_edit();
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    fn after_edit(&mut self) {
        self.dirty = true;
        self.revalidate();
    }

    /// The mandatory check runs first and short-circuits: an empty mandatory
    /// field never reaches the validator.
    fn revalidate(&mut self) {
        let mut outcome = ValidationOutcome::Valid;
        if self.config.mandatory {
            outcome = mandatory_check(&self.text);
        }
        if outcome.is_valid() {
            if let Some(validator) = &self.config.validator {
                outcome = validator(&self.text);
            }
        }
        self.error = match outcome {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(message) => Some(message),
        };
        if let Some(binding) = &self.validity {
            binding.set(self.error.is_none());
        }
    }
}
