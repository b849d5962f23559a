use anyhow::Result;

use crate::config::Config;
use crate::dataset::VerbSet;
use crate::session::drill::{DrillState, Phase};
use crate::session::guess::Category;
use crate::session::input::{self, Accent, DrillEvent, Outcome};
use crate::session::tally::SessionTally;
use crate::ui::components::verb_menu::VerbMenu;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Drill,
    VerbSelect,
}

pub struct App {
    pub screen: AppScreen,
    pub drill: DrillState,
    pub tally: SessionTally,
    pub config: Config,
    pub theme: &'static Theme,
    pub verb_menu: VerbMenu<'static>,
    pub describe_focus: Category,
    pub should_quit: bool,
    config_dirty: bool,
}

impl App {
    /// `config.default_verb` must already name a verb in `verbs`.
    pub fn new(config: Config, verbs: VerbSet, seed: Option<u64>) -> Result<Self> {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_else(|| {
            tracing::warn!(
                theme = %config.theme,
                available = ?Theme::available_themes(),
                "theme not found; using default"
            );
            Theme::default()
        });
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let mut verb_menu = VerbMenu::new(&verbs, theme);
        verb_menu.highlight(&config.default_verb);

        let drill = match seed {
            Some(seed) => DrillState::with_seed(verbs, &config.default_verb, seed)?,
            None => DrillState::new(verbs, &config.default_verb)?,
        };
        tracing::info!(verb = drill.verb(), forms = drill.entries().len(), "drill started");

        Ok(Self {
            screen: AppScreen::Drill,
            drill,
            tally: SessionTally::default(),
            config,
            theme,
            verb_menu,
            describe_focus: Category::Person,
            should_quit: false,
            config_dirty: false,
        })
    }

    fn dispatch(&mut self, event: DrillEvent) -> Outcome {
        match input::apply(&mut self.drill, event) {
            Ok(outcome) => {
                self.after(&outcome);
                outcome
            }
            Err(err) => {
                tracing::warn!("drill event rejected: {err}");
                Outcome::Ignored
            }
        }
    }

    fn after(&mut self, outcome: &Outcome) {
        self.tally.record(outcome);
        if matches!(
            outcome,
            Outcome::Describe | Outcome::Solved | Outcome::VerbChanged
        ) {
            self.describe_focus = Category::Person;
        }
    }

    pub fn type_char(&mut self, ch: char) -> Outcome {
        let mut text = self.drill.typed_text().to_string();
        text.push(ch);
        self.dispatch(DrillEvent::SetTypedText(text))
    }

    pub fn backspace(&mut self) -> Outcome {
        let outcome = input::process_backspace(&mut self.drill);
        self.after(&outcome);
        outcome
    }

    pub fn insert_accent(&mut self, accent: Accent) -> Outcome {
        self.dispatch(DrillEvent::AppendAccent(accent))
    }

    pub fn focus_next(&mut self) {
        self.describe_focus = self.describe_focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.describe_focus = self.describe_focus.prev();
    }

    /// Move the focused guess to its next (or previous) option.
    pub fn cycle_guess(&mut self, forward: bool) -> Outcome {
        if self.drill.phase() != Phase::Describing {
            return Outcome::Ignored;
        }
        let value = self.drill.guesses().cycled(self.describe_focus, forward);
        self.dispatch(DrillEvent::SetGuess(value))
    }

    pub fn submit(&mut self) -> Outcome {
        self.dispatch(DrillEvent::SubmitGuess)
    }

    pub fn open_verb_menu(&mut self) {
        self.verb_menu.highlight(self.drill.verb());
        self.screen = AppScreen::VerbSelect;
    }

    pub fn close_verb_menu(&mut self) {
        self.screen = AppScreen::Drill;
    }

    pub fn choose_verb(&mut self) -> Outcome {
        self.screen = AppScreen::Drill;
        let Some(verb) = self.verb_menu.current().map(str::to_string) else {
            return Outcome::Ignored;
        };
        let outcome = self.dispatch(DrillEvent::SelectVerb(verb.clone()));
        if outcome == Outcome::VerbChanged {
            self.config.default_verb = verb;
            self.config_dirty = true;
        }
        outcome
    }

    /// Persist preferences changed during the session.
    pub fn save_config(&self) {
        if !self.config_dirty {
            return;
        }
        if let Err(err) = self.config.save() {
            tracing::warn!("failed to save config: {err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::grammar::Person;

    fn app() -> App {
        App::new(Config::default(), VerbSet::embedded().unwrap(), Some(5)).unwrap()
    }

    fn type_term(app: &mut App) -> Outcome {
        let term = app.drill.selected().term.clone();
        let mut outcome = Outcome::Ignored;
        for ch in term.chars() {
            outcome = app.type_char(ch);
        }
        outcome
    }

    #[test]
    fn test_typing_selected_term_completes_it() {
        let mut app = app();
        let personal = app.drill.selected().is_personal();
        let outcome = type_term(&mut app);
        if personal {
            assert_eq!(outcome, Outcome::Describe);
            assert_eq!(app.drill.phase(), Phase::Describing);
        } else {
            assert_eq!(outcome, Outcome::Advanced);
            assert_eq!(app.drill.current_index(), 1);
        }
        assert_eq!(app.tally.forms_typed, 1);
    }

    #[test]
    fn test_describe_flow_with_cycling() {
        let mut app = app();
        // Advance until a personal form comes up
        while !app.drill.selected().is_personal() {
            type_term(&mut app);
        }
        type_term(&mut app);
        assert_eq!(app.drill.phase(), Phase::Describing);

        let target = app.drill.selected().clone();
        while Some(app.drill.guesses().person) != target.person {
            app.cycle_guess(true);
        }
        app.focus_next();
        while Some(app.drill.guesses().number) != target.number {
            app.cycle_guess(true);
        }
        app.focus_next();
        while Some(app.drill.guesses().mood) != target.mood {
            app.cycle_guess(true);
        }
        app.focus_next();
        while Some(app.drill.guesses().tense) != target.tense {
            app.cycle_guess(false);
        }
        assert_eq!(app.submit(), Outcome::Solved);
        assert_eq!(app.describe_focus, Category::Person);
        assert_eq!(app.tally.descriptions_solved, 1);
    }

    #[test]
    fn test_cycle_ignored_while_typing() {
        let mut app = app();
        if app.drill.phase() == Phase::Typing {
            assert_eq!(app.cycle_guess(true), Outcome::Ignored);
            assert_eq!(app.drill.guesses().person, Person::First);
        }
    }

    #[test]
    fn test_choose_verb_switches_and_marks_config() {
        let mut app = app();
        app.open_verb_menu();
        assert_eq!(app.screen, AppScreen::VerbSelect);
        app.verb_menu.highlight("comer");
        assert_eq!(app.choose_verb(), Outcome::VerbChanged);
        assert_eq!(app.screen, AppScreen::Drill);
        assert_eq!(app.drill.verb(), "comer");
        assert_eq!(app.config.default_verb, "comer");
        assert!(app.config_dirty);
    }

    #[test]
    fn test_choose_current_verb_is_ignored() {
        let mut app = app();
        app.open_verb_menu();
        assert_eq!(app.choose_verb(), Outcome::Ignored);
        assert!(!app.config_dirty);
    }

    #[test]
    fn test_backspace_edits_typed_text() {
        let mut app = app();
        app.type_char('z');
        app.type_char('z');
        app.backspace();
        assert_eq!(app.drill.typed_text(), "z");
    }
}
