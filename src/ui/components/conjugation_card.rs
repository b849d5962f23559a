use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::engine::expand::ConjugationEntry;
use crate::engine::grammar::{Additional, Mood, Number, Person, Tense};
use crate::session::drill::{DrillSnapshot, Phase};
use crate::ui::theme::{Theme, ThemeColors};

/// The drilled form: category chips while typing, then the term itself.
pub struct ConjugationCard<'a> {
    snapshot: DrillSnapshot<'a>,
    show_stem: bool,
    show_pronoun: bool,
    theme: &'a Theme,
}

impl<'a> ConjugationCard<'a> {
    pub fn new(snapshot: DrillSnapshot<'a>, theme: &'a Theme) -> Self {
        Self {
            snapshot,
            show_stem: true,
            show_pronoun: true,
            theme,
        }
    }

    pub fn show_stem(mut self, show: bool) -> Self {
        self.show_stem = show;
        self
    }

    pub fn show_pronoun(mut self, show: bool) -> Self {
        self.show_pronoun = show;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChipKind {
    Person,
    Number,
    Mood,
    Tense,
    Form,
}

fn person_glyph(person: Person) -> &'static str {
    match person {
        Person::First => "●",
        Person::Second => "●●",
        Person::Third => "●●●",
    }
}

fn number_glyph(number: Number) -> &'static str {
    match number {
        Number::Singular => "⬡",
        Number::Plural => "⬡⬡",
    }
}

fn mood_glyph(mood: Mood) -> &'static str {
    match mood {
        Mood::Indicative => "!",
        Mood::Subjunctive => "?",
        Mood::Imperative => "‼",
    }
}

fn tense_glyph(tense: Tense) -> &'static str {
    match tense {
        Tense::Present => "▸",
        Tense::Imperfect => "↺▸",
        Tense::Preterit => "↺",
        Tense::Future => "↻",
        Tense::PresentConditional => "?▸",
    }
}

fn additional_glyph(additional: Additional) -> &'static str {
    match additional {
        Additional::Infinitive => "∞",
        Additional::Imperative => "‼",
        Additional::Gerund => "»",
        Additional::PastParticiple => "⇄",
    }
}

/// Chip captions for an entry: four for personal forms, one for singletons.
fn chip_labels(entry: &ConjugationEntry) -> Vec<(ChipKind, String)> {
    let mut chips = Vec::new();
    if let (Some(person), Some(number)) = (entry.person, entry.number) {
        chips.push((
            ChipKind::Person,
            format!("{} {} Person", person_glyph(person), person.label()),
        ));
        chips.push((
            ChipKind::Number,
            format!("{} {}", number_glyph(number), number.label()),
        ));
        if let Some(mood) = entry.mood {
            chips.push((
                ChipKind::Mood,
                format!("{} {} Mood", mood_glyph(mood), mood.label()),
            ));
        }
        if let Some(tense) = entry.tense {
            chips.push((
                ChipKind::Tense,
                format!("{} {} Tense", tense_glyph(tense), tense.label()),
            ));
        }
    } else if let Some(additional) = entry.additional {
        chips.push((
            ChipKind::Form,
            format!("{} {}", additional_glyph(additional), additional.label()),
        ));
    }
    chips
}

fn chip_color(kind: ChipKind, colors: &ThemeColors) -> Color {
    match kind {
        ChipKind::Person => colors.warning(),
        ChipKind::Number | ChipKind::Form => colors.success(),
        ChipKind::Mood => colors.accent(),
        ChipKind::Tense => colors.error(),
    }
}

/// Split the term for display: optional pronoun, dimmed stem, emphasised ending.
fn term_parts(
    entry: &ConjugationEntry,
    show_stem: bool,
    show_pronoun: bool,
) -> (Option<&'static str>, &str, &str) {
    let pronoun = if show_pronoun {
        entry.pronoun_hint()
    } else {
        None
    };
    if show_stem {
        let ending = entry.ending();
        let stem = &entry.term[..entry.term.len() - ending.len()];
        (pronoun, stem, ending)
    } else {
        (pronoun, "", entry.term.as_str())
    }
}

impl Widget for ConjugationCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let entry = self.snapshot.selected;

        let chip_line = match self.snapshot.phase {
            Phase::Typing => {
                let mut spans = Vec::new();
                for (kind, label) in chip_labels(entry) {
                    spans.push(Span::styled(
                        format!(" {label} "),
                        Style::default()
                            .fg(colors.bg())
                            .bg(chip_color(kind, colors))
                            .add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::raw("  "));
                }
                Line::from(spans)
            }
            Phase::Describing => Line::from(Span::styled(
                "Which person, number, mood and tense is this?",
                Style::default().fg(colors.text_pending()),
            )),
        };

        let (pronoun, stem, ending) = term_parts(entry, self.show_stem, self.show_pronoun);
        let mut term_spans = Vec::new();
        if let Some(pronoun) = pronoun {
            term_spans.push(Span::styled(
                format!("({pronoun}) "),
                Style::default().fg(colors.text_pending()),
            ));
        }
        term_spans.push(Span::styled(
            stem.to_string(),
            Style::default().fg(colors.text_pending()),
        ));
        term_spans.push(Span::styled(
            ending.to_string(),
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
        ));

        let lines = vec![
            Line::from(""),
            chip_line,
            Line::from(""),
            Line::from(term_spans),
        ];

        let block = Block::bordered()
            .title(format!(" {} ", self.snapshot.verb))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
