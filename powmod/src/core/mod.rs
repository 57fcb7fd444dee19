//! Deterministic, pure logic shared by the pipeline and the CLI.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod format;
pub mod lexer;
pub mod modexp;
pub mod range;
pub mod slot;
pub mod types;
