use crate::session::input::Outcome;

/// Running counts for the current sitting. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionTally {
    pub forms_typed: u32,
    pub descriptions_solved: u32,
    pub mismatches: u32,
    /// Forms finished since the last mismatch.
    pub run: u32,
    pub best_run: u32,
}

impl SessionTally {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Describe => self.forms_typed += 1,
            Outcome::Advanced => {
                self.forms_typed += 1;
                self.extend_run();
            }
            Outcome::Solved => {
                self.descriptions_solved += 1;
                self.extend_run();
            }
            Outcome::Mismatch(_) => {
                self.mismatches += 1;
                self.run = 0;
            }
            Outcome::Ignored
            | Outcome::Typed
            | Outcome::GuessChanged
            | Outcome::VerbChanged => {}
        }
    }

    fn extend_run(&mut self) {
        self.run += 1;
        self.best_run = self.best_run.max(self.run);
    }

    /// Share of submitted descriptions that were right, as a percentage.
    pub fn accuracy(&self) -> f64 {
        let total = self.descriptions_solved + self.mismatches;
        if total == 0 {
            return 100.0;
        }
        self.descriptions_solved as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::guess::{Category, GuessMismatch};

    fn mismatch() -> Outcome {
        Outcome::Mismatch(GuessMismatch {
            category: Category::Tense,
        })
    }

    #[test]
    fn test_accuracy_starts_at_100() {
        assert_eq!(SessionTally::default().accuracy(), 100.0);
    }

    #[test]
    fn test_counts_and_runs() {
        let mut t = SessionTally::default();
        t.record(&Outcome::Advanced);
        t.record(&Outcome::Describe);
        t.record(&Outcome::Solved);
        assert_eq!(t.forms_typed, 2);
        assert_eq!(t.descriptions_solved, 1);
        assert_eq!(t.run, 2);

        t.record(&Outcome::Describe);
        t.record(&mismatch());
        assert_eq!(t.run, 0);
        assert_eq!(t.best_run, 2);
        t.record(&Outcome::Solved);
        assert_eq!(t.run, 1);
        assert_eq!(t.accuracy(), 2.0 / 3.0 * 100.0);
    }

    #[test]
    fn test_non_progress_outcomes_ignored() {
        let mut t = SessionTally::default();
        t.record(&Outcome::Typed);
        t.record(&Outcome::Ignored);
        t.record(&Outcome::GuessChanged);
        t.record(&Outcome::VerbChanged);
        assert_eq!(t, SessionTally::default());
    }
}
