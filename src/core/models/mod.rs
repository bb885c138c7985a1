//! Domain models for cpfcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Cpf`] - A validated identifier
//! - [`ParseError`] - Why a candidate was rejected
//! - [`Verdict`] - Valid/invalid feedback state

pub mod cpf;
mod verdict;

pub use cpf::{BASE_LEN, CPF_LEN, Cpf, ParseError};
pub use verdict::Verdict;
