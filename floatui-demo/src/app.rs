use color_eyre::eyre::{Report, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use regex::Regex;

use floatui::{
    FieldConfig, FloatingField, KeyCommand, TerminalGuard, ValidationOutcome, ValidityBinding,
    classify, render_field,
};

use crate::status::StatusLine;

const FIELD_HEIGHT: u16 = 6;
const HELP_TEXT: &str = "Tab/Shift+Tab navigate • Ctrl+S submit • Ctrl+Q quit";

#[derive(Debug)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

pub struct DemoApp {
    title: String,
    fields: Vec<FloatingField>,
    validity: Vec<ValidityBinding>,
    focus: usize,
    status: StatusLine,
    exit_armed: bool,
    should_quit: bool,
    submission: Option<Submission>,
}

impl DemoApp {
    pub fn new(title: String) -> Result<Self> {
        let email_pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?;

        let cells = vec![
            ValidityBinding::default(),
            ValidityBinding::default(),
            ValidityBinding::default(),
        ];
        let fields = vec![
            FloatingField::new(
                FieldConfig::new("First Name")
                    .with_mandatory(true)
                    .with_clear_button(true),
            )
            .with_validity(cells[0].clone()),
            FloatingField::new(
                FieldConfig::new("Last Name")
                    .with_mandatory(true)
                    .with_clear_button(true)
                    .with_validator(|value| {
                        if value.chars().count() > 8 {
                            ValidationOutcome::Valid
                        } else {
                            ValidationOutcome::invalid(
                                "Last name must be longer than 8 characters",
                            )
                        }
                    }),
            )
            .with_validity(cells[1].clone()),
            FloatingField::new(
                FieldConfig::new("Email")
                    .with_clear_button(true)
                    .with_validator(move |value| {
                        if value.is_empty() || email_pattern.is_match(value) {
                            ValidationOutcome::Valid
                        } else {
                            ValidationOutcome::invalid("Enter a valid email address")
                        }
                    }),
            )
            .with_validity(cells[2].clone()),
        ];

        Ok(Self {
            title,
            fields,
            validity: cells,
            focus: 0,
            status: StatusLine::new(),
            exit_armed: false,
            should_quit: false,
            submission: None,
        })
    }

    pub fn run(mut self) -> Result<Option<Submission>> {
        let mut terminal = TerminalGuard::new().map_err(Report::msg)?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            match event::read()? {
                Event::Key(key) => self.handle_key(&key),
                Event::Resize(_, _) => {}
                Event::Mouse(_) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        Ok(self.submission)
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        let outer = Block::default()
            .title(self.title.clone())
            .borders(Borders::ALL);
        let inner = outer.inner(frame.area());
        frame.render_widget(outer, frame.area());

        let mut constraints: Vec<Constraint> = self
            .fields
            .iter()
            .map(|_| Constraint::Length(FIELD_HEIGHT))
            .collect();
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (idx, field) in self.fields.iter().enumerate() {
            render_field(frame, chunks[idx], field, idx == self.focus);
        }

        let status = Paragraph::new(self.status.message().to_string());
        frame.render_widget(status, chunks[self.fields.len() + 1]);
        let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[self.fields.len() + 2]);
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match classify(key) {
            KeyCommand::Submit => {
                self.exit_armed = false;
                self.on_submit();
            }
            KeyCommand::Quit => self.on_quit(),
            KeyCommand::NextField => {
                self.exit_armed = false;
                self.focus = (self.focus + 1) % self.fields.len();
            }
            KeyCommand::PrevField => {
                self.exit_armed = false;
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
            }
            KeyCommand::ResetStatus => {
                self.exit_armed = false;
                self.status.ready();
            }
            KeyCommand::Edit(edit) => {
                let field = &mut self.fields[self.focus];
                if field.handle_key(&edit) {
                    let label = field.title().to_string();
                    self.exit_armed = false;
                    self.status.editing(&label);
                }
            }
            KeyCommand::None => {}
        }
    }

    fn on_submit(&mut self) {
        let invalid = self.validity.iter().filter(|cell| !cell.get()).count();
        if invalid > 0 {
            self.status.issues_remaining(invalid);
            return;
        }
        self.submission = Some(Submission {
            first_name: self.fields[0].text().to_string(),
            last_name: self.fields[1].text().to_string(),
            email: self.fields[2].text().to_string(),
        });
        self.should_quit = true;
    }

    fn on_quit(&mut self) {
        let dirty = self.fields.iter().any(|field| field.is_dirty());
        if dirty && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}
