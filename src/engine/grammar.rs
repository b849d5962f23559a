use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];

    /// Grammatical person as the 1-based number used in paradigm tables.
    pub fn value(self) -> u8 {
        match self {
            Person::First => 1,
            Person::Second => 2,
            Person::Third => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Person::First => "First",
            Person::Second => "Second",
            Person::Third => "Third",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];

    pub fn value(self) -> u8 {
        match self {
            Number::Singular => 1,
            Number::Plural => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Number::Singular => "Singular",
            Number::Plural => "Plural",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mood {
    Indicative,
    Subjunctive,
    Imperative,
}

impl Mood {
    /// Moods offered when describing a personal form. The imperative entry
    /// never carries person/number, so it is never described.
    pub const DESCRIBABLE: [Mood; 2] = [Mood::Indicative, Mood::Subjunctive];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Indicative => "Indicative",
            Mood::Subjunctive => "Subjunctive",
            Mood::Imperative => "Imperative",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tense {
    Present,
    Imperfect,
    Preterit,
    Future,
    PresentConditional,
}

impl Tense {
    pub const ALL: [Tense; 5] = [
        Tense::Present,
        Tense::Imperfect,
        Tense::Preterit,
        Tense::Future,
        Tense::PresentConditional,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tense::Present => "Present",
            Tense::Imperfect => "Imperfect",
            Tense::Preterit => "Preterit",
            Tense::Future => "Future",
            Tense::PresentConditional => "Present Conditional",
        }
    }
}

/// Tag for the singleton forms that carry no person/number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Additional {
    Infinitive,
    Imperative,
    Gerund,
    PastParticiple,
}

impl Additional {
    pub fn label(self) -> &'static str {
        match self {
            Additional::Infinitive => "Infinitive",
            Additional::Imperative => "Imperative",
            Additional::Gerund => "Gerund",
            Additional::PastParticiple => "Past Participle",
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Additional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_and_number_values_are_one_based() {
        let persons: Vec<u8> = Person::ALL.iter().map(|p| p.value()).collect();
        assert_eq!(persons, vec![1, 2, 3]);
        assert_eq!(Number::Singular.value(), 1);
        assert_eq!(Number::Plural.value(), 2);
    }

    #[test]
    fn test_serde_names_match_dataset_keys() {
        assert_eq!(
            serde_json::to_string(&Tense::PresentConditional).unwrap(),
            "\"presentConditional\""
        );
        assert_eq!(
            serde_json::to_string(&Additional::PastParticiple).unwrap(),
            "\"pastParticiple\""
        );
        let mood: Mood = serde_json::from_str("\"subjunctive\"").unwrap();
        assert_eq!(mood, Mood::Subjunctive);
    }

    #[test]
    fn test_imperative_is_not_describable() {
        assert!(!Mood::DESCRIBABLE.contains(&Mood::Imperative));
    }
}
