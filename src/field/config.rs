use std::fmt;
use std::rc::Rc;

use crate::validate::{ValidationOutcome, Validator};

/// Immutable per-instance settings for a floating-label field.
///
/// Everything defaults off: no clear affordance, not mandatory, no validator.
#[derive(Clone)]
pub struct FieldConfig {
    pub(crate) title: String,
    pub(crate) clear_button: bool,
    pub(crate) mandatory: bool,
    pub(crate) validator: Option<Validator>,
}

impl FieldConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            clear_button: false,
            mandatory: false,
            validator: None,
        }
    }

    pub fn with_clear_button(mut self, visible: bool) -> Self {
        self.clear_button = visible;
        self
    }

    pub fn with_mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    pub fn with_validator(
        mut self,
        validator: impl Fn(&str) -> ValidationOutcome + 'static,
    ) -> Self {
        self.validator = Some(Rc::new(validator));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clear_button(&self) -> bool {
        self.clear_button
    }

    pub fn mandatory(&self) -> bool {
        self.mandatory
    }
}

impl fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfig")
            .field("title", &self.title)
            .field("clear_button", &self.clear_button)
            .field("mandatory", &self.mandatory)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}
