//! cpfcheck - Validation of Brazilian CPF identifiers
//!
//! This library validates CPF numbers (11 digits, two mod-11 check digits),
//! formats them for display, and drives live feedback for an input field
//! through a small controller that any UI can plug into.
//!
//! ```
//! assert!(cpfcheck::is_valid("529.982.247-25"));
//! assert!(!cpfcheck::is_valid("111.111.111-11"));
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod field;
pub mod output;
pub mod paths;

pub use crate::core::models::{Cpf, ParseError, Verdict};
pub use crate::core::services::{format, is_valid, is_valid_opt, normalize, validate};
