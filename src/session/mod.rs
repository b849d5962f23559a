pub mod drill;
pub mod guess;
pub mod input;
pub mod tally;
