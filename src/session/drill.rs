use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::dataset::VerbSet;
use crate::engine::expand::{ConjugationEntry, expand};
use crate::session::guess::{GuessMismatch, Guesses};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the shown form to be typed exactly.
    Typing,
    /// Form typed; waiting for its person/number/mood/tense.
    Describing,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Unknown verb: {0}")]
    UnknownVerb(String),
    #[error("Verb dataset is empty")]
    EmptyDataset,
}

/// Everything a view needs to draw one frame of the drill.
#[derive(Clone, Copy, Debug)]
pub struct DrillSnapshot<'a> {
    pub verb: &'a str,
    pub current_index: u64,
    pub selected: &'a ConjugationEntry,
    pub phase: Phase,
    pub typed_text: &'a str,
    pub guesses: Guesses,
    pub last_error: Option<GuessMismatch>,
}

impl DrillSnapshot<'_> {
    pub fn error_message(&self) -> Option<String> {
        self.last_error.map(|e| e.to_string())
    }
}

/// Drill controller state. Entries are derived from `verb`; `selected` is
/// re-drawn whenever `verb` or `current_index` changes.
pub struct DrillState {
    pub(super) verbs: VerbSet,
    pub(super) verb: String,
    pub(super) entries: Vec<ConjugationEntry>,
    pub(super) current_index: u64,
    pub(super) selected: usize,
    pub(super) typed_text: String,
    pub(super) phase: Phase,
    pub(super) guesses: Guesses,
    pub(super) last_error: Option<GuessMismatch>,
    rng: SmallRng,
}

impl DrillState {
    pub fn new(verbs: VerbSet, verb: &str) -> Result<Self, SessionError> {
        Self::with_rng(verbs, verb, SmallRng::from_entropy())
    }

    pub fn with_seed(verbs: VerbSet, verb: &str, seed: u64) -> Result<Self, SessionError> {
        Self::with_rng(verbs, verb, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(verbs: VerbSet, verb: &str, rng: SmallRng) -> Result<Self, SessionError> {
        if verbs.is_empty() {
            return Err(SessionError::EmptyDataset);
        }
        let paradigm = verbs
            .get(verb)
            .ok_or_else(|| SessionError::UnknownVerb(verb.to_string()))?;
        let entries = expand(paradigm);

        let mut state = Self {
            verbs,
            verb: verb.to_string(),
            entries,
            current_index: 0,
            selected: 0,
            typed_text: String::new(),
            phase: Phase::Typing,
            guesses: Guesses::default(),
            last_error: None,
            rng,
        };
        state.reselect();
        Ok(state)
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn entries(&self) -> &[ConjugationEntry] {
        &self.entries
    }

    pub fn current_index(&self) -> u64 {
        self.current_index
    }

    pub fn selected(&self) -> &ConjugationEntry {
        &self.entries[self.selected]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn typed_text(&self) -> &str {
        &self.typed_text
    }

    pub fn guesses(&self) -> Guesses {
        self.guesses
    }

    pub fn snapshot(&self) -> DrillSnapshot<'_> {
        DrillSnapshot {
            verb: &self.verb,
            current_index: self.current_index,
            selected: self.selected(),
            phase: self.phase,
            typed_text: &self.typed_text,
            guesses: self.guesses,
            last_error: self.last_error,
        }
    }

    /// Switch to another verb and start over in the typing phase.
    /// Returns false when `verb` is already the current one.
    pub(super) fn change_verb(&mut self, verb: &str) -> Result<bool, SessionError> {
        if verb == self.verb {
            return Ok(false);
        }
        let paradigm = self
            .verbs
            .get(verb)
            .ok_or_else(|| SessionError::UnknownVerb(verb.to_string()))?;
        self.entries = expand(paradigm);
        self.verb = verb.to_string();
        self.phase = Phase::Typing;
        self.typed_text.clear();
        self.guesses = Guesses::default();
        self.last_error = None;
        self.reselect();
        Ok(true)
    }

    /// Bump the counter and draw a new form from the same verb.
    pub(super) fn advance(&mut self) {
        self.current_index += 1;
        self.reselect();
    }

    fn reselect(&mut self) {
        self.selected = self.rng.gen_range(0..self.entries.len());
        tracing::debug!(
            verb = %self.verb,
            index = self.current_index,
            term = %self.selected().term,
            "selected form"
        );
    }

    #[cfg(test)]
    pub(crate) fn force_select(&mut self, idx: usize) {
        self.selected = idx;
    }
}
