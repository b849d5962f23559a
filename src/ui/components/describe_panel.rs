use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::guess::{Category, GuessValue, Guesses};
use crate::ui::theme::Theme;

/// Radio-style rows for the four guesses, plus the last mismatch.
pub struct DescribePanel<'a> {
    guesses: Guesses,
    focus: Category,
    error: Option<String>,
    theme: &'a Theme,
}

impl<'a> DescribePanel<'a> {
    pub fn new(
        guesses: Guesses,
        focus: Category,
        error: Option<String>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            guesses,
            focus,
            error,
            theme,
        }
    }
}

/// Options of one category paired with whether each is the current guess.
fn option_row(guesses: &Guesses, category: Category) -> Vec<(&'static str, bool)> {
    let current = guesses.value(category);
    GuessValue::options(category)
        .into_iter()
        .map(|value| (value.label(), value == current))
        .collect()
}

impl Widget for DescribePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let mut lines = Vec::new();

        for category in Category::ALL {
            let focused = category == self.focus;
            let indicator = if focused { " > " } else { "   " };
            let label_style = if focused {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            lines.push(Line::from(Span::styled(
                format!("{indicator}{}", category.label()),
                label_style,
            )));

            let mut spans = vec![Span::raw("     ")];
            for (label, selected) in option_row(&self.guesses, category) {
                let (mark, style) = if selected {
                    ("(•)", Style::default().fg(colors.text_correct()))
                } else {
                    ("( )", Style::default().fg(colors.text_pending()))
                };
                spans.push(Span::styled(format!("{mark} {label}   "), style));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        if let Some(error) = self.error {
            lines.push(Line::from(Span::styled(
                format!(" {error}"),
                Style::default()
                    .fg(colors.error())
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let block = Block::bordered()
            .title(" Describe ")
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
