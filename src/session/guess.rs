use std::fmt;

use crate::engine::expand::ConjugationEntry;
use crate::engine::grammar::{Mood, Number, Person, Tense};

/// The four things a user names about a personal form, in checking order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Person,
    Number,
    Mood,
    Tense,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Person,
        Category::Number,
        Category::Mood,
        Category::Tense,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Person => "Person",
            Category::Number => "Number",
            Category::Mood => "Mood",
            Category::Tense => "Tense",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, true)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, false)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// First category whose guess disagrees with the drilled form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{category} doesn't match")]
pub struct GuessMismatch {
    pub category: Category,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessValue {
    Person(Person),
    Number(Number),
    Mood(Mood),
    Tense(Tense),
}

impl GuessValue {
    pub fn category(self) -> Category {
        match self {
            GuessValue::Person(_) => Category::Person,
            GuessValue::Number(_) => Category::Number,
            GuessValue::Mood(_) => Category::Mood,
            GuessValue::Tense(_) => Category::Tense,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GuessValue::Person(p) => p.label(),
            GuessValue::Number(n) => n.label(),
            GuessValue::Mood(m) => m.label(),
            GuessValue::Tense(t) => t.label(),
        }
    }

    /// Every value offered for a category, in display order.
    pub fn options(category: Category) -> Vec<GuessValue> {
        match category {
            Category::Person => Person::ALL.iter().map(|&p| GuessValue::Person(p)).collect(),
            Category::Number => Number::ALL.iter().map(|&n| GuessValue::Number(n)).collect(),
            Category::Mood => Mood::DESCRIBABLE
                .iter()
                .map(|&m| GuessValue::Mood(m))
                .collect(),
            Category::Tense => Tense::ALL.iter().map(|&t| GuessValue::Tense(t)).collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guesses {
    pub person: Person,
    pub number: Number,
    pub mood: Mood,
    pub tense: Tense,
}

impl Default for Guesses {
    fn default() -> Self {
        Self {
            person: Person::First,
            number: Number::Singular,
            mood: Mood::Indicative,
            tense: Tense::Present,
        }
    }
}

impl Guesses {
    pub fn set(&mut self, value: GuessValue) {
        match value {
            GuessValue::Person(p) => self.person = p,
            GuessValue::Number(n) => self.number = n,
            GuessValue::Mood(m) => self.mood = m,
            GuessValue::Tense(t) => self.tense = t,
        }
    }

    pub fn value(&self, category: Category) -> GuessValue {
        match category {
            Category::Person => GuessValue::Person(self.person),
            Category::Number => GuessValue::Number(self.number),
            Category::Mood => GuessValue::Mood(self.mood),
            Category::Tense => GuessValue::Tense(self.tense),
        }
    }

    /// The option after (or before) the current guess for `category`, wrapping.
    pub fn cycled(&self, category: Category, forward: bool) -> GuessValue {
        let options = GuessValue::options(category);
        cycle(&options, self.value(category), forward)
    }

    /// Compare against the entry's tags in checking order, stopping at the
    /// first disagreement.
    pub fn check(&self, entry: &ConjugationEntry) -> Result<(), GuessMismatch> {
        let mismatch = if entry.person != Some(self.person) {
            Some(Category::Person)
        } else if entry.number != Some(self.number) {
            Some(Category::Number)
        } else if entry.mood != Some(self.mood) {
            Some(Category::Mood)
        } else if entry.tense != Some(self.tense) {
            Some(Category::Tense)
        } else {
            None
        };
        match mismatch {
            Some(category) => Err(GuessMismatch { category }),
            None => Ok(()),
        }
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let len = options.len();
    let idx = options.iter().position(|&o| o == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else if idx == 0 {
        len - 1
    } else {
        idx - 1
    };
    options[next]
}
