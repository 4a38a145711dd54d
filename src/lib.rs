#![deny(rust_2018_idioms)]

mod binding;
mod field;
mod input;
mod presentation;
mod terminal;
mod validate;

pub use binding::ValidityBinding;
pub use field::{FieldConfig, FloatingField};
pub use input::{KeyCommand, classify};
pub use presentation::{CursorHint, FieldRender, build_field_lines, render_field};
pub use terminal::TerminalGuard;
pub use validate::{MANDATORY_MESSAGE, ValidationOutcome, Validator};

pub mod prelude {
    pub use super::{
        FieldConfig, FloatingField, ValidationOutcome, ValidityBinding, render_field,
    };
}
