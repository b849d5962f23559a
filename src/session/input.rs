use crate::session::drill::{DrillState, Phase, SessionError};
use crate::session::guess::{GuessMismatch, GuessValue, Guesses};

/// Accented vowels offered as one-key inserts while typing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    A,
    E,
    I,
    O,
}

impl Accent {
    pub const ALL: [Accent; 4] = [Accent::A, Accent::E, Accent::I, Accent::O];

    pub fn as_char(self) -> char {
        match self {
            Accent::A => 'á',
            Accent::E => 'é',
            Accent::I => 'í',
            Accent::O => 'ó',
        }
    }
}

/// The only inputs the drill accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrillEvent {
    SelectVerb(String),
    SetTypedText(String),
    AppendAccent(Accent),
    SetGuess(GuessValue),
    SubmitGuess,
}

/// What an event did to the drill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Not applicable in the current phase.
    Ignored,
    /// Typed text changed without matching the target.
    Typed,
    /// Personal form typed; now describing it.
    Describe,
    /// Non-personal form typed; a new form was drawn.
    Advanced,
    /// Description correct; a new form was drawn.
    Solved,
    Mismatch(GuessMismatch),
    GuessChanged,
    VerbChanged,
}

pub fn apply(drill: &mut DrillState, event: DrillEvent) -> Result<Outcome, SessionError> {
    let outcome = match event {
        DrillEvent::SelectVerb(key) => process_select_verb(drill, &key)?,
        DrillEvent::SetTypedText(text) => process_typed_text(drill, text),
        DrillEvent::AppendAccent(accent) => process_accent(drill, accent),
        DrillEvent::SetGuess(value) => process_guess(drill, value),
        DrillEvent::SubmitGuess => process_submit(drill),
    };
    Ok(outcome)
}

pub fn process_select_verb(drill: &mut DrillState, key: &str) -> Result<Outcome, SessionError> {
    if drill.change_verb(key)? {
        tracing::info!(verb = key, "verb changed");
        Ok(Outcome::VerbChanged)
    } else {
        Ok(Outcome::Ignored)
    }
}

pub fn process_typed_text(drill: &mut DrillState, text: String) -> Outcome {
    if drill.phase != Phase::Typing {
        return Outcome::Ignored;
    }
    drill.typed_text = text;
    if drill.typed_text != drill.selected().term {
        return Outcome::Typed;
    }

    drill.typed_text.clear();
    if drill.selected().is_personal() {
        drill.phase = Phase::Describing;
        tracing::debug!(term = %drill.selected().term, "typed; describing");
        Outcome::Describe
    } else {
        tracing::debug!(term = %drill.selected().term, "typed; advancing");
        drill.advance();
        Outcome::Advanced
    }
}

pub fn process_accent(drill: &mut DrillState, accent: Accent) -> Outcome {
    if drill.phase != Phase::Typing {
        return Outcome::Ignored;
    }
    let mut text = drill.typed_text.clone();
    text.push(accent.as_char());
    process_typed_text(drill, text)
}

pub fn process_guess(drill: &mut DrillState, value: GuessValue) -> Outcome {
    if drill.phase != Phase::Describing {
        return Outcome::Ignored;
    }
    drill.guesses.set(value);
    Outcome::GuessChanged
}

pub fn process_submit(drill: &mut DrillState) -> Outcome {
    if drill.phase != Phase::Describing {
        return Outcome::Ignored;
    }
    match drill.guesses.check(drill.selected()) {
        Err(mismatch) => {
            tracing::debug!(category = %mismatch.category, "guess mismatch");
            drill.last_error = Some(mismatch);
            Outcome::Mismatch(mismatch)
        }
        Ok(()) => {
            drill.last_error = None;
            drill.phase = Phase::Typing;
            drill.guesses = Guesses::default();
            drill.advance();
            Outcome::Solved
        }
    }
}

/// Drop the last typed char (terminal backspace).
pub fn process_backspace(drill: &mut DrillState) -> Outcome {
    if drill.phase != Phase::Typing {
        return Outcome::Ignored;
    }
    let mut text = drill.typed_text.clone();
    text.pop();
    process_typed_text(drill, text)
}
