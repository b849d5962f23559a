use crate::engine::fold::fold_diacritics;
use crate::engine::grammar::{Additional, Mood, Number, Person, Tense};
use crate::engine::paradigm::{FormGroup, PERSON_NUMBER, VerbParadigm};

/// Entries produced per verb: 8 six-form groups plus 4 singletons.
pub const ENTRIES_PER_VERB: usize = 8 * 6 + 4;

/// One drillable surface form with its grammatical tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConjugationEntry {
    pub person: Option<Person>,
    pub number: Option<Number>,
    pub mood: Option<Mood>,
    pub tense: Option<Tense>,
    pub additional: Option<Additional>,
    pub stem: Option<String>,
    pub term: String,
}

impl ConjugationEntry {
    fn singleton(additional: Additional, mood: Option<Mood>, term: &str) -> Self {
        Self {
            person: None,
            number: None,
            mood,
            tense: None,
            additional: Some(additional),
            stem: None,
            term: term.to_string(),
        }
    }

    /// Finite form carrying both person and number.
    pub fn is_personal(&self) -> bool {
        self.person.is_some() && self.number.is_some()
    }

    /// Remainder of the term after the stem.
    pub fn ending(&self) -> &str {
        match &self.stem {
            Some(stem) => self.term.strip_prefix(stem.as_str()).unwrap_or(&self.term),
            None => &self.term,
        }
    }

    /// Subject pronoun shown before singular forms whose first and third
    /// person can coincide.
    pub fn pronoun_hint(&self) -> Option<&'static str> {
        match (self.person, self.number) {
            (Some(Person::First), Some(Number::Singular)) => Some("yo"),
            (Some(Person::Third), Some(Number::Singular)) => Some("él/ella"),
            _ => None,
        }
    }
}

/// Length in chars of the stem shared by a six-form group.
///
/// Left-to-right scan over the folded words: word `i` is compared with word
/// `i - 1` on their first `i` chars only. A difference caps the length at `i`;
/// otherwise it is capped at the length of word `i`. Once the length is down to
/// 1 no further comparison is made.
///
/// This is not the longest common prefix of the group. It can overestimate it
/// (amar present gives 3, "amo", where the six forms only share "am"), so the
/// stem is not always a prefix of every form in the group.
pub fn stem_length(words: &FormGroup) -> usize {
    let folded: Vec<Vec<char>> = words
        .iter()
        .map(|w| fold_diacritics(w).chars().collect())
        .collect();

    let mut len = folded[0].len();
    for i in 1..folded.len() {
        let (prev, word) = (&folded[i - 1], &folded[i]);
        if len > 1 && head(word, i) != head(prev, i) {
            len = len.min(i);
        } else {
            len = len.min(word.len());
        }
    }
    len
}

fn head(word: &[char], n: usize) -> &[char] {
    &word[..n.min(word.len())]
}

fn person_number_group(mood: Mood, tense: Tense, words: &FormGroup) -> Vec<ConjugationEntry> {
    let len = stem_length(words);
    PERSON_NUMBER
        .iter()
        .zip(words.iter())
        .map(|(&(person, number), word)| ConjugationEntry {
            person: Some(person),
            number: Some(number),
            mood: Some(mood),
            tense: Some(tense),
            additional: None,
            stem: Some(word.chars().take(len).collect()),
            term: word.clone(),
        })
        .collect()
}

/// Flatten a paradigm into its drillable entries, in table order.
pub fn expand(paradigm: &VerbParadigm) -> Vec<ConjugationEntry> {
    let ind = &paradigm.indicative;
    let sub = &paradigm.subjunctive;
    let groups: [(Mood, Tense, &FormGroup); 8] = [
        (Mood::Indicative, Tense::Present, &ind.present),
        (Mood::Indicative, Tense::Imperfect, &ind.imperfect),
        (Mood::Indicative, Tense::Preterit, &ind.preterit),
        (Mood::Indicative, Tense::Future, &ind.future),
        (Mood::Indicative, Tense::PresentConditional, &ind.present_conditional),
        (Mood::Subjunctive, Tense::Present, &sub.present),
        (Mood::Subjunctive, Tense::Imperfect, &sub.imperfect),
        (Mood::Subjunctive, Tense::Future, &sub.future),
    ];

    let mut entries = Vec::with_capacity(ENTRIES_PER_VERB);
    for (mood, tense, words) in groups {
        entries.extend(person_number_group(mood, tense, words));
    }
    entries.push(ConjugationEntry::singleton(
        Additional::Imperative,
        Some(Mood::Imperative),
        &paradigm.imperative,
    ));
    entries.push(ConjugationEntry::singleton(
        Additional::Infinitive,
        None,
        &paradigm.infinitive,
    ));
    entries.push(ConjugationEntry::singleton(
        Additional::Gerund,
        None,
        &paradigm.gerund,
    ));
    entries.push(ConjugationEntry::singleton(
        Additional::PastParticiple,
        None,
        &paradigm.past_participle,
    ));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::paradigm::{IndicativeForms, SubjunctiveForms};

    fn group(words: [&str; 6]) -> FormGroup {
        words.map(|w| w.to_string())
    }

    /// Chars shared by every folded word of the group.
    fn shared_prefix_len(words: &FormGroup) -> usize {
        let folded: Vec<String> = words.iter().map(|w| fold_diacritics(w)).collect();
        let first: Vec<char> = folded[0].chars().collect();
        folded[1..].iter().fold(first.len(), |len, word| {
            len.min(first.iter().zip(word.chars()).take_while(|(a, b)| **a == *b).count())
        })
    }

    fn amar() -> VerbParadigm {
        VerbParadigm {
            indicative: IndicativeForms {
                present: group(["amo", "amas", "ama", "amamos", "amáis", "aman"]),
                imperfect: group(["amaba", "amabas", "amaba", "amábamos", "amabais", "amaban"]),
                preterit: group(["amé", "amaste", "amó", "amamos", "amasteis", "amaron"]),
                future: group(["amaré", "amarás", "amará", "amaremos", "amaréis", "amarán"]),
                present_conditional: group([
                    "amaría", "amarías", "amaría", "amaríamos", "amaríais", "amarían",
                ]),
            },
            subjunctive: SubjunctiveForms {
                present: group(["ame", "ames", "ame", "amemos", "améis", "amen"]),
                imperfect: group(["amara", "amaras", "amara", "amáramos", "amarais", "amaran"]),
                future: group(["amare", "amares", "amare", "amáremos", "amareis", "amaren"]),
            },
            imperative: "ama".to_string(),
            infinitive: "amar".to_string(),
            gerund: "amando".to_string(),
            past_participle: "amado".to_string(),
        }
    }

    #[test]
    fn test_expand_yields_53_entries() {
        assert_eq!(expand(&amar()).len(), 53);
        assert_eq!(ENTRIES_PER_VERB, 53);
    }

    #[test]
    fn test_indicative_present_tags_and_stem() {
        let entries = expand(&amar());
        let present = &entries[0..6];
        let tags: Vec<(u8, u8)> = present
            .iter()
            .map(|e| (e.person.unwrap().value(), e.number.unwrap().value()))
            .collect();
        assert_eq!(tags, vec![(1, 1), (2, 1), (3, 1), (1, 2), (2, 2), (3, 2)]);
        for entry in present {
            assert_eq!(entry.stem.as_ref().unwrap().chars().count(), 3);
            assert_eq!(entry.mood, Some(Mood::Indicative));
            assert_eq!(entry.tense, Some(Tense::Present));
            assert!(entry.additional.is_none());
        }
        assert_eq!(present[0].stem.as_deref(), Some("amo"));
        assert_eq!(present[0].ending(), "");
        assert_eq!(present[4].stem.as_deref(), Some("amá"));
        assert_eq!(present[4].ending(), "is");
    }

    #[test]
    fn test_group_order() {
        let entries = expand(&amar());
        let expected = [
            (Mood::Indicative, Tense::Present),
            (Mood::Indicative, Tense::Imperfect),
            (Mood::Indicative, Tense::Preterit),
            (Mood::Indicative, Tense::Future),
            (Mood::Indicative, Tense::PresentConditional),
            (Mood::Subjunctive, Tense::Present),
            (Mood::Subjunctive, Tense::Imperfect),
            (Mood::Subjunctive, Tense::Future),
        ];
        for (g, (mood, tense)) in expected.iter().enumerate() {
            for entry in &entries[g * 6..g * 6 + 6] {
                assert_eq!(entry.mood, Some(*mood));
                assert_eq!(entry.tense, Some(*tense));
            }
        }
    }

    #[test]
    fn test_singletons_at_the_end() {
        let entries = expand(&amar());
        let tail = &entries[48..];
        assert_eq!(tail[0].additional, Some(Additional::Imperative));
        assert_eq!(tail[0].mood, Some(Mood::Imperative));
        assert_eq!(tail[0].term, "ama");
        assert_eq!(tail[1].additional, Some(Additional::Infinitive));
        assert_eq!(tail[1].term, "amar");
        assert_eq!(tail[2].additional, Some(Additional::Gerund));
        assert_eq!(tail[3].additional, Some(Additional::PastParticiple));
        for entry in tail {
            assert!(!entry.is_personal());
            assert!(entry.stem.is_none());
            assert!(entry.tense.is_none());
        }
        for entry in &tail[1..] {
            assert!(entry.mood.is_none());
        }
    }

    #[test]
    fn test_stem_is_accent_insensitive() {
        // folded "amabamos" shares "amaba" with the rest of the group
        let entries = expand(&amar());
        let imperfect = &entries[6..12];
        for entry in imperfect {
            assert_eq!(entry.stem.as_ref().unwrap().chars().count(), 5);
        }
        assert_eq!(imperfect[0].stem.as_deref(), Some("amaba"));
        assert_eq!(imperfect[3].stem.as_deref(), Some("amába"));
        assert_eq!(imperfect[3].ending(), "mos");
    }

    #[test]
    fn test_stem_of_amar_present_overshoots_shared_prefix() {
        // "amais" vs "amamos" differ at 4 chars, which never caps below 3
        let words = amar().indicative.present;
        assert_eq!(stem_length(&words), 3);
        assert_eq!(shared_prefix_len(&words), 2);
    }

    #[test]
    fn test_stem_misses_divergence_beyond_compared_prefix() {
        // "haz" caps the length at its own 3 chars; at i = 2 only "ha" is compared
        let words = group(["habla", "hablas", "haz", "habíamos", "habláis", "hablan"]);
        assert_eq!(stem_length(&words), 3);
        assert_eq!(shared_prefix_len(&words), 2);
    }

    #[test]
    fn test_stem_of_tener_present() {
        let words = group(["tengo", "tienes", "tiene", "tenemos", "tenéis", "tienen"]);
        assert_eq!(stem_length(&words), 3);
        assert_eq!(shared_prefix_len(&words), 1);
    }

    #[test]
    fn test_stem_for_suppletive_group() {
        // "eres" differs from "soy" at the first char, then the scan stops
        let words = group(["soy", "eres", "es", "somos", "sois", "son"]);
        assert_eq!(stem_length(&words), 1);
        assert_eq!(shared_prefix_len(&words), 0);
    }

    #[test]
    fn test_stem_ignores_last_char_difference_within_short_words() {
        // third chars are first compared at i = 3, which cannot cap below 3
        let words = group(["ama", "amb", "amc", "amd", "ame", "amf"]);
        assert_eq!(stem_length(&words), 3);
        assert_eq!(shared_prefix_len(&words), 2);
    }

    #[test]
    fn test_stem_bounded_by_first_word() {
        let words = group(["ir", "irás", "irá", "iremos", "iréis", "irán"]);
        assert_eq!(stem_length(&words), 2);
    }

    #[test]
    fn test_stem_is_first_chars_of_each_term() {
        for entry in &expand(&amar())[..48] {
            let stem = entry.stem.as_ref().unwrap();
            assert!(entry.term.starts_with(stem.as_str()), "{:?}", entry.term);
        }
    }

    #[test]
    fn test_expand_is_idempotent() {
        let p = amar();
        assert_eq!(expand(&p), expand(&p));
    }

    #[test]
    fn test_pronoun_hint() {
        let entries = expand(&amar());
        assert_eq!(entries[0].pronoun_hint(), Some("yo"));
        assert_eq!(entries[1].pronoun_hint(), None);
        assert_eq!(entries[2].pronoun_hint(), Some("él/ella"));
        assert_eq!(entries[3].pronoun_hint(), None);
        assert_eq!(entries[49].pronoun_hint(), None);
    }
}
