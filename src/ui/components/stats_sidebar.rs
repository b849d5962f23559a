use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::tally::SessionTally;
use crate::ui::theme::Theme;

pub struct StatsSidebar<'a> {
    tally: &'a SessionTally,
    round: u64,
    theme: &'a Theme,
}

impl<'a> StatsSidebar<'a> {
    pub fn new(tally: &'a SessionTally, round: u64, theme: &'a Theme) -> Self {
        Self {
            tally,
            round,
            theme,
        }
    }
}

impl Widget for StatsSidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let t = self.tally;

        let rows: Vec<(&str, String)> = vec![
            ("Round", format!("{}", self.round + 1)),
            ("Typed", format!("{}", t.forms_typed)),
            ("Described", format!("{}", t.descriptions_solved)),
            ("Mismatches", format!("{}", t.mismatches)),
            ("Accuracy", format!("{:.0}%", t.accuracy())),
            ("Run", format!("{}", t.run)),
            ("Best run", format!("{}", t.best_run)),
        ];

        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {label:<12}"),
                        Style::default().fg(colors.text_pending()),
                    ),
                    Span::styled(
                        value,
                        Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();

        let block = Block::bordered()
            .title(" Session ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
