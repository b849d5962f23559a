use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::input::Accent;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharStatus {
    Correct,
    Incorrect,
}

/// Typed text so far, coloured against the target term.
pub struct TypingArea<'a> {
    typed: &'a str,
    target: &'a str,
    theme: &'a Theme,
}

impl<'a> TypingArea<'a> {
    pub fn new(typed: &'a str, target: &'a str, theme: &'a Theme) -> Self {
        Self {
            typed,
            target,
            theme,
        }
    }
}

/// Position-wise comparison; chars typed past the end of the target are wrong.
fn classify(typed: &str, target: &str) -> Vec<(char, CharStatus)> {
    let mut target_chars = target.chars();
    typed
        .chars()
        .map(|ch| {
            let status = if target_chars.next() == Some(ch) {
                CharStatus::Correct
            } else {
                CharStatus::Incorrect
            };
            (ch, status)
        })
        .collect()
}

fn accent_hint_line() -> String {
    Accent::ALL
        .iter()
        .enumerate()
        .map(|(i, accent)| format!("[F{}] {}", i + 1, accent.as_char()))
        .collect::<Vec<_>>()
        .join("  ")
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut spans: Vec<Span> = classify(self.typed, self.target)
            .into_iter()
            .map(|(ch, status)| {
                let style = match status {
                    CharStatus::Correct => Style::default().fg(colors.text_correct()),
                    CharStatus::Incorrect => Style::default()
                        .fg(colors.text_incorrect())
                        .bg(colors.text_incorrect_bg())
                        .add_modifier(Modifier::UNDERLINED),
                };
                Span::styled(ch.to_string(), style)
            })
            .collect();
        spans.push(Span::styled(
            " ",
            Style::default()
                .fg(colors.text_cursor_fg())
                .bg(colors.text_cursor_bg()),
        ));

        let lines = vec![
            Line::from(spans),
            Line::from(""),
            Line::from(Span::styled(
                accent_hint_line(),
                Style::default().fg(colors.accent()),
            )),
        ];

        let block = Block::bordered()
            .title(" Write ")
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
