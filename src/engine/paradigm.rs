use serde::{Deserialize, Serialize};

use crate::engine::grammar::{Number, Person};

/// Row order of every six-form group in a paradigm table.
pub const PERSON_NUMBER: [(Person, Number); 6] = [
    (Person::First, Number::Singular),
    (Person::Second, Number::Singular),
    (Person::Third, Number::Singular),
    (Person::First, Number::Plural),
    (Person::Second, Number::Plural),
    (Person::Third, Number::Plural),
];

/// Six surface forms ordered as [`PERSON_NUMBER`].
pub type FormGroup = [String; 6];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicativeForms {
    pub present: FormGroup,
    pub imperfect: FormGroup,
    pub preterit: FormGroup,
    pub future: FormGroup,
    pub present_conditional: FormGroup,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjunctiveForms {
    pub present: FormGroup,
    pub imperfect: FormGroup,
    pub future: FormGroup,
}

/// All inflected forms of one verb, as stored in the dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbParadigm {
    pub indicative: IndicativeForms,
    pub subjunctive: SubjunctiveForms,
    pub imperative: String,
    pub infinitive: String,
    pub gerund: String,
    pub past_participle: String,
}
