//! Custom widgets for the flashcard TUI.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Widget, Wrap},
};

use super::theme::Theme;

// ══════════════════════════════════════════════════════════════════════════
// Logo Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct Logo<'a> {
    theme: &'a Theme,
}

impl<'a> Logo<'a> {
    const ART: &'static str = r#"
    ╭──────────────────────────────────────╮
    │  _   _                  _            │
    │ | | | | __ _ _ __  ____(_)           │
    │ | |_| |/ _` | '_ \|_  /| |           │
    │ |  _  | (_| | | | |/ / | |           │
    │ |_| |_|\__,_|_| |_/___||_|           │
    │                  ┌─────────────────┐ │
    │     ╭────╮       │ Chinese         │ │
    │     │ 汉 │       │ Vocabulary      │ │
    │     ╰────╯       │ Flashcards      │ │
    │                  └─────────────────┘ │
    ╰──────────────────────────────────────╯"#;

    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Logo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = Self::ART
            .lines()
            .skip(1)
            .map(|line| {
                Line::from(Span::styled(
                    line,
                    Style::default().fg(self.theme.colors.primary),
                ))
            })
            .collect();

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Session Bar Widget
// ══════════════════════════════════════════════════════════════════════════

/// One-line progress readout shown above the card.
pub struct SessionBar<'a> {
    remaining: usize,
    studied: usize,
    theme: &'a Theme,
}

impl<'a> SessionBar<'a> {
    pub fn new(remaining: usize, studied: usize, theme: &'a Theme) -> Self {
        Self {
            remaining,
            studied,
            theme,
        }
    }
}

impl Widget for SessionBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let remaining_text = Line::from(vec![
            Span::styled("● ", self.theme.highlight()),
            Span::styled(
                "Remaining: ",
                Style::default().fg(self.theme.colors.text_muted),
            ),
            Span::styled(self.remaining.to_string(), self.theme.highlight()),
        ]);
        Paragraph::new(remaining_text)
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        let studied_text = Line::from(vec![
            Span::styled("● ", self.theme.verdict_correct()),
            Span::styled(
                "Done: ",
                Style::default().fg(self.theme.colors.text_muted),
            ),
            Span::styled(self.studied.to_string(), self.theme.verdict_correct()),
        ]);
        Paragraph::new(studied_text)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Flashcard Widget
// ══════════════════════════════════════════════════════════════════════════

/// The card panel. Shows the chosen fields of the current card, one per
/// line, with the border signalling prompt vs. reveal.
pub struct FlashcardWidget<'a> {
    lines: &'a [&'a str],
    revealed: bool,
    theme: &'a Theme,
}

impl<'a> FlashcardWidget<'a> {
    pub fn new(lines: &'a [&'a str], revealed: bool, theme: &'a Theme) -> Self {
        Self {
            lines,
            revealed,
            theme,
        }
    }
}

impl Widget for FlashcardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (label, label_style, border_style) = if self.revealed {
            (
                "REVEAL",
                self.theme.card_back(),
                Style::default().fg(self.theme.colors.success),
            )
        } else {
            (
                "CARD",
                self.theme.card_front(),
                Style::default().fg(self.theme.colors.accent),
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(label, label_style),
                Span::raw(" "),
            ]))
            .title_alignment(Alignment::Center);

        let inner = block.inner(area);
        block.render(area, buf);

        let text: Vec<Line> = self
            .lines
            .iter()
            .flat_map(|field| {
                [
                    Line::from(Span::styled(
                        *field,
                        Style::default().fg(self.theme.colors.text),
                    )),
                    Line::from(""),
                ]
            })
            .collect();

        // Center vertically
        let content_height = text.len() as u16;
        let vertical_padding = inner.height.saturating_sub(content_height) / 2;

        let content_area = Rect {
            x: inner.x + 2,
            y: inner.y + vertical_padding,
            width: inner.width.saturating_sub(4),
            height: inner.height.saturating_sub(vertical_padding),
        };

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(content_area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Verdict Buttons Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct VerdictButtons<'a> {
    theme: &'a Theme,
}

impl<'a> VerdictButtons<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for VerdictButtons<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let buttons = [
            ("i", "Incorrect", self.theme.colors.error),
            ("c", "Correct", self.theme.colors.success),
        ];

        for (chunk, (key, label, color)) in chunks.iter().zip(buttons) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color));

            let inner = block.inner(*chunk);
            block.render(*chunk, buf);

            let key_line = Line::from(Span::styled(
                key,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            Paragraph::new(key_line)
                .alignment(Alignment::Center)
                .render(Rect { y: inner.y, ..inner }, buf);

            let label_line = Line::from(Span::styled(label, Style::default().fg(color)));
            Paragraph::new(label_line).alignment(Alignment::Center).render(
                Rect {
                    y: inner.y + 1,
                    ..inner
                },
                buf,
            );
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Key Hints Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct KeyHints<'a> {
    hints: &'a [(&'a str, &'a str)],
    theme: &'a Theme,
}

impl<'a> KeyHints<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = self
            .hints
            .iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(*key, self.theme.key_highlight()),
                    Span::styled(format!(" {} ", desc), self.theme.key_hint()),
                    Span::styled("│ ", Style::default().fg(self.theme.colors.text_dim)),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Score Screen Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct ScoreScreen<'a> {
    correct: usize,
    total: usize,
    theme: &'a Theme,
}

impl<'a> ScoreScreen<'a> {
    pub fn new(correct: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            correct,
            total,
            theme,
        }
    }
}

impl Widget for ScoreScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.colors.success))
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("SESSION COMPLETE", self.theme.card_back()),
                Span::raw(" "),
            ]))
            .title_alignment(Alignment::Center);

        let inner = block.inner(area);
        block.render(area, buf);

        let percent = if self.total > 0 {
            self.correct * 100 / self.total
        } else {
            0
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{}/{} correct", self.correct, self.total),
                Style::default()
                    .fg(self.theme.colors.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("{}%", percent),
                Style::default().fg(self.theme.colors.text_muted),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(self.theme.colors.text_dim)),
                Span::styled("r", self.theme.key_highlight()),
                Span::styled(
                    " to restart or ",
                    Style::default().fg(self.theme.colors.text_dim),
                ),
                Span::styled("Esc", self.theme.key_highlight()),
                Span::styled(
                    " for the menu",
                    Style::default().fg(self.theme.colors.text_dim),
                ),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
