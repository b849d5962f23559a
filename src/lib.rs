// Library target for criterion benchmarks and integration tests.
// The binary entry point is main.rs; this file re-declares the part of the
// module tree that has no terminal dependency, so harnesses can import
// `conjugar::engine::*` / `conjugar::session::*`.
#![allow(dead_code)]

pub mod dataset;
pub mod engine;
pub mod session;
