use std::rc::Rc;

/// Message shown when a mandatory field is left empty.
pub const MANDATORY_MESSAGE: &str = "This field is mandatory";

/// Result of checking a field's current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(String),
}

/// Caller-supplied check mapping the current text to an outcome.
pub type Validator = Rc<dyn Fn(&str) -> ValidationOutcome>;

impl ValidationOutcome {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

pub(crate) fn mandatory_check(contents: &str) -> ValidationOutcome {
    if contents.is_empty() {
        ValidationOutcome::Invalid(MANDATORY_MESSAGE.to_string())
    } else {
        ValidationOutcome::Valid
    }
}
