use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::dataset::VerbSet;
use crate::ui::theme::Theme;

pub struct VerbMenuItem {
    pub infinitive: String,
    pub description: String,
}

pub struct VerbMenu<'a> {
    pub items: Vec<VerbMenuItem>,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> VerbMenu<'a> {
    pub fn new(verbs: &VerbSet, theme: &'a Theme) -> Self {
        let items = verbs
            .keys()
            .filter_map(|key| {
                let paradigm = verbs.get(key)?;
                Some(VerbMenuItem {
                    infinitive: key.to_string(),
                    description: format!(
                        "{}, {}, {}",
                        paradigm.indicative.present[0], paradigm.gerund, paradigm.past_participle
                    ),
                })
            })
            .collect();
        Self {
            items,
            selected: 0,
            theme,
        }
    }

    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.items.len();
    }

    pub fn prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = self.items.len() - 1;
        }
    }

    /// Move the cursor onto `infinitive` if it is listed.
    pub fn highlight(&mut self, infinitive: &str) {
        if let Some(idx) = self.items.iter().position(|i| i.infinitive == infinitive) {
            self.selected = idx;
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.items.get(self.selected).map(|i| i.infinitive.as_str())
    }
}

impl Widget for &VerbMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Verb ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(
            "Choose a verb to drill",
            Style::default().fg(colors.fg()),
        )))
        .alignment(Alignment::Center)
        .render(layout[0], buf);

        // Keep the cursor on screen when the list is taller than the popup
        let visible = layout[1].height as usize;
        let offset = if visible == 0 {
            0
        } else {
            self.selected.saturating_sub(visible - 1)
        };

        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, item)| {
                let is_selected = i == self.selected;
                let indicator = if is_selected { ">" } else { " " };
                let label_style = Style::default()
                    .fg(if is_selected {
                        colors.accent()
                    } else {
                        colors.fg()
                    })
                    .add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    });
                Line::from(vec![
                    Span::styled(format!(" {indicator} {:<12}", item.infinitive), label_style),
                    Span::styled(
                        item.description.clone(),
                        Style::default().fg(colors.text_pending()),
                    ),
                ])
            })
            .collect();

        Paragraph::new(lines).render(layout[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_verb() {
        let verbs = VerbSet::embedded().unwrap();
        let theme = Theme::default();
        let menu = VerbMenu::new(&verbs, &theme);
        assert_eq!(menu.items.len(), verbs.len());
        assert_eq!(menu.current(), Some("amar"));
        assert_eq!(menu.items[0].description, "amo, amando, amado");
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let verbs = VerbSet::embedded().unwrap();
        let theme = Theme::default();
        let mut menu = VerbMenu::new(&verbs, &theme);
        menu.prev();
        assert_eq!(menu.selected, menu.items.len() - 1);
        menu.next();
        assert_eq!(menu.selected, 0);
    }

    #[test]
    fn test_highlight_moves_cursor() {
        let verbs = VerbSet::embedded().unwrap();
        let theme = Theme::default();
        let mut menu = VerbMenu::new(&verbs, &theme);
        menu.highlight("vivir");
        assert_eq!(menu.current(), Some("vivir"));
        menu.highlight("missing");
        assert_eq!(menu.current(), Some("vivir"));
    }
}
