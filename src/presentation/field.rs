use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::field::FloatingField;

const CLEAR_AFFORDANCE: &str = " ⊗";

/// Derived view model for one field: the lines to draw and where the
/// terminal cursor belongs while the field has focus.
#[derive(Debug)]
pub struct FieldRender {
    pub lines: Vec<Line<'static>>,
    pub cursor_hint: Option<CursorHint>,
}

#[derive(Debug, Clone, Copy)]
pub struct CursorHint {
    pub line_offset: usize,
    pub value_width: u16,
}

/// Pure derivation of a field's visual tree. Layout, top to bottom:
/// wrapped error lines (only while invalid), the floating label row (blank
/// while the field is empty and the title sits inside the input as a
/// placeholder), then the input panel — bordered with a cursor hint when
/// focused.
pub fn build_field_lines(field: &FloatingField, focused: bool, max_width: u16) -> FieldRender {
    let mut lines = Vec::new();

    if let Some(message) = field.error() {
        lines.extend(error_lines(message, max_width));
    }

    lines.push(label_line(field, focused));

    let label_rows = lines.len();
    let (value_panel, cursor_hint) = value_panel_lines(field, focused, max_width);
    lines.extend(value_panel);

    FieldRender {
        lines,
        cursor_hint: cursor_hint.map(|mut hint| {
            hint.line_offset += label_rows;
            hint
        }),
    }
}

pub fn render_field(frame: &mut Frame<'_>, area: Rect, field: &FloatingField, focused: bool) {
    let content_width = area.width.saturating_sub(4);
    let render = build_field_lines(field, focused, content_width);

    frame.render_widget(Paragraph::new(render.lines), area);

    if focused {
        if let Some(cursor) = render.cursor_hint {
            let line = cursor
                .line_offset
                .min(area.height.saturating_sub(1) as usize) as u16;
            let cursor_y = area.y.saturating_add(line);
            let cursor_x = area
                .x
                .saturating_add(2)
                .saturating_add(cursor.value_width);
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

fn label_line(field: &FloatingField, focused: bool) -> Line<'static> {
    if field.is_empty() {
        return Line::from("");
    }
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    let mut label = field.title().to_string();
    if field.config().mandatory() {
        label.push_str(" *");
    }
    Line::from(Span::styled(label, style))
}

fn value_panel_lines(
    field: &FloatingField,
    focused: bool,
    max_width: u16,
) -> (Vec<Line<'static>>, Option<CursorHint>) {
    let clamp_width = max_width.max(4) as usize;
    let placeholder = field.is_empty();
    let value_text = if placeholder {
        field.title().to_string()
    } else {
        field.text().to_string()
    };
    let mut wrapped: Vec<String> = wrap(&value_text, clamp_width)
        .into_iter()
        .map(|segment| segment.into_owned())
        .collect();
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }

    let show_clear = field.config().clear_button() && !placeholder;
    let affordance_width = if show_clear {
        UnicodeWidthStr::width(CLEAR_AFFORDANCE)
    } else {
        0
    };
    let inner_width = wrapped
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let mut width = UnicodeWidthStr::width(line.as_str());
            if idx + 1 == wrapped.len() {
                width += affordance_width;
            }
            width
        })
        .max()
        .unwrap_or(0);
    let cursor_column = if placeholder {
        0
    } else {
        wrapped
            .last()
            .map(|line| UnicodeWidthStr::width(line.as_str()))
            .unwrap_or(0)
    };

    let value_style = if placeholder {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let affordance_style = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::new();
    let mut cursor_hint = None;

    if focused {
        let border_style = Style::default().fg(Color::Yellow);
        let border_line = "─".repeat(inner_width.saturating_add(2));

        lines.push(Line::from(Span::styled(
            format!("┌{}┐", border_line),
            border_style,
        )));
        for (idx, segment) in wrapped.iter().enumerate() {
            let mut spans = vec![Span::styled("│ ", border_style)];
            let mut used = UnicodeWidthStr::width(segment.as_str());
            spans.push(Span::styled(segment.clone(), value_style));
            if idx + 1 == wrapped.len() && show_clear {
                spans.push(Span::styled(CLEAR_AFFORDANCE.to_string(), affordance_style));
                used += affordance_width;
            }
            if used < inner_width {
                spans.push(Span::raw(" ".repeat(inner_width - used)));
            }
            spans.push(Span::styled(" │", border_style));
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(Span::styled(
            format!("└{}┘", border_line),
            border_style,
        )));
        cursor_hint = Some(CursorHint {
            line_offset: wrapped.len(),
            value_width: cursor_column as u16,
        });
    } else {
        for (idx, segment) in wrapped.iter().enumerate() {
            let mut spans = vec![Span::raw("  "), Span::styled(segment.clone(), value_style)];
            if idx + 1 == wrapped.len() && show_clear {
                spans.push(Span::styled(CLEAR_AFFORDANCE.to_string(), affordance_style));
            }
            lines.push(Line::from(spans));
        }
    }

    (lines, cursor_hint)
}

fn error_lines(message: &str, max_width: u16) -> Vec<Line<'static>> {
    wrap(message, max_width.max(4) as usize)
        .into_iter()
        .map(|segment| {
            Line::from(Span::styled(
                segment.into_owned(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldConfig;
    use crate::validate::MANDATORY_MESSAGE;

    fn line_text(line: &Line<'_>) -> String {
        line.spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn empty_field_shows_title_as_placeholder() {
        let field = FloatingField::new(FieldConfig::new("First Name"));
        let render = build_field_lines(&field, false, 40);
        assert_eq!(line_text(&render.lines[0]), "");
        assert!(line_text(&render.lines[1]).contains("First Name"));
    }

    #[test]
    fn label_floats_above_once_text_is_entered() {
        let field = FloatingField::new(FieldConfig::new("First Name")).with_text("Ada");
        let render = build_field_lines(&field, false, 40);
        assert_eq!(line_text(&render.lines[0]), "First Name");
        assert!(line_text(&render.lines[1]).contains("Ada"));
        assert!(!line_text(&render.lines[1]).contains("First Name"));
    }

    #[test]
    fn label_floats_independent_of_validity() {
        let field = FloatingField::new(
            FieldConfig::new("Last Name")
                .with_mandatory(true)
                .with_validator(|_| {
                    crate::validate::ValidationOutcome::invalid("too short")
                }),
        )
        .with_text("Bob");
        let render = build_field_lines(&field, false, 40);
        assert_eq!(line_text(&render.lines[0]), "too short");
        assert_eq!(line_text(&render.lines[1]), "Last Name *");
    }

    #[test]
    fn error_line_appears_only_while_invalid() {
        let mut field = FloatingField::new(FieldConfig::new("First Name").with_mandatory(true));
        let render = build_field_lines(&field, false, 40);
        assert_eq!(line_text(&render.lines[0]), MANDATORY_MESSAGE);

        field.set_text("Ada");
        let render = build_field_lines(&field, false, 40);
        assert!(
            render
                .lines
                .iter()
                .all(|line| !line_text(line).contains(MANDATORY_MESSAGE))
        );
    }

    #[test]
    fn long_error_messages_wrap() {
        let field = FloatingField::new(FieldConfig::new("Last Name").with_validator(|_| {
            crate::validate::ValidationOutcome::invalid(
                "Last name must be longer than 8 characters",
            )
        }));
        let render = build_field_lines(&field, false, 16);
        let error_rows = render
            .lines
            .iter()
            .take_while(|line| !line_text(line).is_empty())
            .count();
        assert!(error_rows > 1);
    }

    #[test]
    fn clear_affordance_tracks_config_and_content() {
        let with_clear = FloatingField::new(
            FieldConfig::new("First Name").with_clear_button(true),
        )
        .with_text("Ada");
        let render = build_field_lines(&with_clear, false, 40);
        assert!(render.lines.iter().any(|line| line_text(line).contains('⊗')));

        let emptied = FloatingField::new(FieldConfig::new("First Name").with_clear_button(true));
        let render = build_field_lines(&emptied, false, 40);
        assert!(render.lines.iter().all(|line| !line_text(line).contains('⊗')));

        let without = FloatingField::new(FieldConfig::new("First Name")).with_text("Ada");
        let render = build_field_lines(&without, false, 40);
        assert!(render.lines.iter().all(|line| !line_text(line).contains('⊗')));
    }

    #[test]
    fn focused_panel_is_bordered_with_cursor_after_text() {
        let field = FloatingField::new(FieldConfig::new("First Name")).with_text("Ada");
        let render = build_field_lines(&field, true, 40);
        assert!(line_text(&render.lines[1]).starts_with('┌'));
        let cursor = render.cursor_hint.expect("focused field exposes a cursor");
        assert_eq!(cursor.value_width, 3);
        assert_eq!(line_text(&render.lines[cursor.line_offset]), "│ Ada │");
    }

    #[test]
    fn placeholder_keeps_cursor_at_column_zero() {
        let field = FloatingField::new(FieldConfig::new("First Name"));
        let render = build_field_lines(&field, true, 40);
        let cursor = render.cursor_hint.expect("cursor hint");
        assert_eq!(cursor.value_width, 0);
    }

    #[test]
    fn unfocused_panel_has_no_cursor() {
        let field = FloatingField::new(FieldConfig::new("First Name")).with_text("Ada");
        let render = build_field_lines(&field, false, 40);
        assert!(render.cursor_hint.is_none());
    }
}
