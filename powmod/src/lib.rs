//! Live modular exponentiation over arbitrary-precision integers.
//!
//! Raw text for a base, an exponent and a modulus is validated on every change
//! and `base^exponent mod modulus` is recomputed only when all three are valid.
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (lexing, range checks, slots,
//!   modular exponentiation, display formatting). No I/O.
//! - **[`io`]**: Configuration files and terminal rendering.
//!
//! [`pipeline`] ties the core together into one recomputation pass, and
//! [`session`] drives it from a stream of change notifications.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
