use conjugar::dataset::VerbSet;
use conjugar::engine::expand::{ENTRIES_PER_VERB, expand, stem_length};
use conjugar::engine::fold::fold_diacritics;
use conjugar::engine::grammar::{Additional, Mood, Person, Tense};

fn bundled() -> VerbSet {
    VerbSet::embedded().expect("bundled dataset parses")
}

#[test]
fn every_bundled_verb_expands_to_full_paradigm() {
    let verbs = bundled();
    for key in verbs.keys() {
        let entries = expand(verbs.get(key).unwrap());
        assert_eq!(entries.len(), ENTRIES_PER_VERB, "verb {key}");
    }
}

/// Chars shared by every folded word of a group.
fn shared_prefix_len(words: &[String; 6]) -> usize {
    let folded: Vec<Vec<char>> = words
        .iter()
        .map(|w| fold_diacritics(w).chars().collect())
        .collect();
    (0..folded[0].len())
        .take_while(|&n| folded.iter().all(|w| w.get(n) == folded[0].get(n)))
        .count()
}

#[test]
fn group_stems_are_leading_chars_of_each_term() {
    let verbs = bundled();
    for key in verbs.keys() {
        let paradigm = verbs.get(key).unwrap();
        let groups = [
            &paradigm.indicative.present,
            &paradigm.indicative.imperfect,
            &paradigm.indicative.preterit,
            &paradigm.indicative.future,
            &paradigm.indicative.present_conditional,
            &paradigm.subjunctive.present,
            &paradigm.subjunctive.imperfect,
            &paradigm.subjunctive.future,
        ];
        let entries = expand(paradigm);
        for (words, chunk) in groups.iter().zip(entries[..48].chunks(6)) {
            let len = stem_length(words);
            for entry in chunk {
                let stem = entry.stem.as_ref().unwrap();
                let expected: String = entry.term.chars().take(len).collect();
                assert_eq!(stem, &expected, "{key}: {:?}", entry.term);
            }
        }
    }
}

#[test]
fn stem_scan_can_exceed_shared_prefix() {
    let verbs = bundled();
    let amar = &verbs.get("amar").unwrap().indicative.present;
    assert_eq!(stem_length(amar), 3);
    assert_eq!(shared_prefix_len(amar), 2);

    let tener = &verbs.get("tener").unwrap().indicative.present;
    assert_eq!(stem_length(tener), 3);
    assert_eq!(shared_prefix_len(tener), 1);
}

#[test]
fn finite_entries_carry_full_description() {
    let verbs = bundled();
    for key in verbs.keys() {
        for entry in expand(verbs.get(key).unwrap()) {
            if entry.is_personal() {
                assert!(entry.person.is_some() && entry.number.is_some());
                assert!(entry.mood.is_some() && entry.tense.is_some());
                assert!(entry.additional.is_none());
            } else {
                assert!(entry.additional.is_some(), "{key}: {:?}", entry.term);
            }
        }
    }
}

#[test]
fn expansion_is_repeatable() {
    let verbs = bundled();
    let comer = verbs.get("comer").unwrap();
    assert_eq!(expand(comer), expand(comer));
}

#[test]
fn amar_matches_reference_forms() {
    let verbs = bundled();
    let entries = expand(verbs.get("amar").unwrap());

    let first = &entries[0];
    assert_eq!(first.term, "amo");
    assert_eq!(first.stem.as_deref(), Some("amo"));
    assert_eq!(entries[1].stem.as_deref(), Some("ama"));
    assert_eq!(first.person, Some(Person::First));
    assert_eq!(first.mood, Some(Mood::Indicative));
    assert_eq!(first.tense, Some(Tense::Present));

    let conditional = &entries[28];
    assert_eq!(conditional.term, "amaríais");
    assert_eq!(conditional.tense, Some(Tense::PresentConditional));

    let imperative = &entries[48];
    assert_eq!(imperative.term, "ama");
    assert_eq!(imperative.additional, Some(Additional::Imperative));

    let participle = &entries[51];
    assert_eq!(participle.term, "amado");
    assert_eq!(participle.additional, Some(Additional::PastParticiple));
    assert!(participle.stem.is_none());
}

#[test]
fn suppletive_present_keeps_one_char_stem() {
    let verbs = bundled();
    let ser = verbs.get("ser").unwrap();
    assert_eq!(stem_length(&ser.indicative.present), 1);
    assert_eq!(shared_prefix_len(&ser.indicative.present), 0);
    let entries = expand(ser);
    assert_eq!(entries[0].stem.as_deref(), Some("s"));
    assert_eq!(entries[0].ending(), "oy");
    assert_eq!(entries[1].stem.as_deref(), Some("e"));
}
