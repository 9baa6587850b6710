//! Main application loop state: key handling and rendering.
//!
//! The `App` owns the session state machine plus purely visual state
//! (list cursors, theme). Key presses are translated into [`Action`]s
//! and handed to the session; rendering only reads the session back.

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::theme::Theme;
use super::widgets::{FlashcardWidget, KeyHints, Logo, ScoreScreen, SessionBar, VerdictButtons};
use crate::config::Config;
use crate::models::Field;
use crate::session::{Action, Page, Session};

pub struct App {
    pub session: Session,
    pub running: bool,

    // Config and theme
    pub config: Config,
    pub theme: Theme,

    // List cursors (visual state only)
    pub lesson_state: ListState,
    pub field_state: ListState,
}

impl App {
    pub fn new(session: Session, config: Config) -> Self {
        let theme = Theme::from_name(&config.theme);
        let lesson_selected = if session.lesson_count() > 0 {
            Some(0)
        } else {
            None
        };

        Self {
            session,
            running: true,
            config,
            theme,
            lesson_state: ListState::default().with_selected(lesson_selected),
            field_state: ListState::default().with_selected(Some(0)),
        }
    }

    fn apply(&mut self, action: Action) {
        self.session.apply(action, &mut rand::thread_rng());
    }

    pub fn cycle_theme(&mut self) {
        let new_theme_name = self.theme.name.next();
        self.theme = Theme::new(new_theme_name);
        self.config.theme = new_theme_name.as_str().to_string();
        let _ = self.config.save();
    }

    // ══════════════════════════════════════════════════════════════════════
    // Event Handling
    // ══════════════════════════════════════════════════════════════════════

    pub fn handle_events(&mut self) -> anyhow::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(());
                }

                match self.session.page() {
                    Page::LessonSelection => self.handle_lesson_selection_keys(key.code),
                    Page::FieldSelection => self.handle_field_selection_keys(key.code),
                    Page::Studying => self.handle_studying_keys(key.code),
                    Page::Revealing => self.handle_revealing_keys(key.code),
                    Page::Results => self.handle_results_keys(key.code),
                }
            }
        }
        Ok(())
    }

    fn handle_lesson_selection_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Up | KeyCode::Char('k') => {
                move_cursor(&mut self.lesson_state, self.session.lesson_count(), -1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                move_cursor(&mut self.lesson_state, self.session.lesson_count(), 1);
            }
            KeyCode::Char(' ') => {
                if let Some(i) = self.lesson_state.selected() {
                    self.apply(Action::ToggleLesson(i));
                }
            }
            KeyCode::Enter => self.apply(Action::Confirm),
            _ => {}
        }
    }

    fn handle_field_selection_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => self.apply(Action::Return),
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Up | KeyCode::Char('k') => {
                move_cursor(&mut self.field_state, Field::ALL.len(), -1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                move_cursor(&mut self.field_state, Field::ALL.len(), 1);
            }
            KeyCode::Char(' ') => {
                if let Some(i) = self.field_state.selected() {
                    self.apply(Action::ToggleField(Field::ALL[i]));
                }
            }
            KeyCode::Enter => self.apply(Action::Confirm),
            _ => {}
        }
    }

    fn handle_studying_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => self.apply(Action::Return),
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char(' ') | KeyCode::Char('f') => self.apply(Action::Flip),
            KeyCode::Char('n') | KeyCode::Enter => self.apply(Action::Next),
            KeyCode::Char('p') => self.apply(Action::Previous),
            _ => {}
        }
    }

    fn handle_revealing_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => self.apply(Action::Return),
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('i') => self.apply(Action::MarkIncorrect),
            KeyCode::Char('c') | KeyCode::Enter => self.apply(Action::MarkCorrect),
            _ => {}
        }
    }

    fn handle_results_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('r') => self.apply(Action::Restart),
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('m') => self.apply(Action::BackToMenu),
            _ => {}
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Rendering
    // ══════════════════════════════════════════════════════════════════════

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Clear with background
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.colors.bg_dark)),
            area,
        );

        match self.session.page() {
            Page::LessonSelection => self.render_lesson_selection(frame, area),
            Page::FieldSelection => self.render_field_selection(frame, area),
            Page::Studying => self.render_card(frame, area, false),
            Page::Revealing => self.render_card(frame, area, true),
            Page::Results => self.render_results(frame, area),
        }
    }

    fn render_lesson_selection(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(2),  // Top padding
            Constraint::Length(12), // Logo
            Constraint::Length(1),  // Spacing
            Constraint::Min(5),     // Lesson list
            Constraint::Length(3),  // Help
        ])
        .split(area);

        frame.render_widget(Logo::new(&self.theme), chunks[1]);

        let list_area = centered_rect(60, 100, chunks[3]);

        let items: Vec<ListItem> = (0..self.session.lesson_count())
            .map(|i| {
                let marker = if self.session.is_lesson_selected(i) {
                    "[x] "
                } else {
                    "[ ] "
                };
                let content = Line::from(vec![
                    Span::styled(marker, self.theme.highlight()),
                    Span::styled(
                        self.session.lesson_label(i),
                        Style::default().fg(self.theme.colors.text),
                    ),
                ]);
                ListItem::new(content)
            })
            .collect();

        if items.is_empty() {
            let empty = Paragraph::new("No lessons found")
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.colors.text_muted));
            frame.render_widget(empty, list_area);
        } else {
            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(self.theme.colors.primary))
                        .title(" Lessons ")
                        .title_style(self.theme.highlight()),
                )
                .highlight_style(self.theme.selected())
                .highlight_symbol("> ");

            frame.render_stateful_widget(list, list_area, &mut self.lesson_state);
        }

        let theme_hint = format!("[{}]", self.theme.name.display_name());
        let hints_data: [(&str, &str); 5] = [
            ("j/k", "nav"),
            ("Space", "toggle"),
            ("Enter", "study"),
            ("t", &theme_hint),
            ("q", "quit"),
        ];
        frame.render_widget(KeyHints::new(&hints_data, &self.theme), chunks[4]);
    }

    fn render_field_selection(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Spacing
            Constraint::Min(5),    // Field list
            Constraint::Length(3), // Help
        ])
        .split(area);

        let title = Paragraph::new("Which fields do you want to see?")
            .alignment(Alignment::Center)
            .style(self.theme.title());
        frame.render_widget(title, chunks[0]);

        let list_area = centered_rect(40, 100, chunks[2]);

        let items: Vec<ListItem> = Field::ALL
            .iter()
            .map(|field| {
                let marker = if self.session.fields().contains(*field) {
                    "[x] "
                } else {
                    "[ ] "
                };
                let content = Line::from(vec![
                    Span::styled(marker, self.theme.highlight()),
                    Span::styled(field.name(), Style::default().fg(self.theme.colors.text)),
                ]);
                ListItem::new(content)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.colors.primary))
                    .title(" Fields ")
                    .title_style(self.theme.highlight()),
            )
            .highlight_style(self.theme.selected())
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, list_area, &mut self.field_state);

        // The confirm guard needs at least one field; surface that.
        if self.session.fields().is_empty() {
            let note = Paragraph::new("Select at least one field to continue")
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.colors.text_muted));
            let note_area = Rect {
                x: chunks[3].x,
                y: chunks[3].y.saturating_sub(1),
                width: chunks[3].width,
                height: 1,
            };
            frame.render_widget(note, note_area);
        }

        let hints = KeyHints::new(
            &[
                ("j/k", "nav"),
                ("Space", "toggle"),
                ("Enter", "start"),
                ("Esc", "menu"),
            ],
            &self.theme,
        );
        frame.render_widget(hints, chunks[3]);
    }

    fn render_card(&mut self, frame: &mut Frame, area: Rect, revealed: bool) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Padding
            Constraint::Length(1), // Session bar
            Constraint::Length(1), // Spacing
            Constraint::Min(10),   // Card
            Constraint::Length(5), // Verdict buttons
            Constraint::Length(2), // Hints
        ])
        .split(area);

        frame.render_widget(
            SessionBar::new(self.session.remaining(), self.session.studied(), &self.theme),
            chunks[1],
        );

        let card_area = centered_rect(70, 100, chunks[3]);
        let lines = self.session.visible_lines();
        frame.render_widget(FlashcardWidget::new(&lines, revealed, &self.theme), card_area);

        if revealed {
            let buttons_area = centered_rect(60, 100, chunks[4]);
            frame.render_widget(VerdictButtons::new(&self.theme), buttons_area);

            let hints = KeyHints::new(
                &[("i", "incorrect"), ("c", "correct"), ("Esc", "menu")],
                &self.theme,
            );
            frame.render_widget(hints, chunks[5]);
        } else {
            let hints = KeyHints::new(
                &[
                    ("Space", "flip"),
                    ("n", "next"),
                    ("p", "previous"),
                    ("Esc", "menu"),
                ],
                &self.theme,
            );
            frame.render_widget(hints, chunks[5]);
        }
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        let (correct, total) = self.session.score();
        let card_area = centered_rect(50, 50, area);
        frame.render_widget(ScoreScreen::new(correct, total, &self.theme), card_area);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ══════════════════════════════════════════════════════════════════════════

/// Move a list cursor up or down with wrap-around.
fn move_cursor(state: &mut ListState, len: usize, delta: i64) {
    if len == 0 {
        return;
    }
    let i = state.selected().unwrap_or(0) as i64;
    let new_i = (i + delta).rem_euclid(len as i64) as usize;
    state.select(Some(new_i));
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
