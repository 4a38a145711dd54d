mod field;

pub use field::{CursorHint, FieldRender, build_field_lines, render_field};
