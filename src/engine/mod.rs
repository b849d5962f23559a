pub mod expand;
pub mod fold;
pub mod grammar;
pub mod paradigm;
