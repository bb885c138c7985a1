//! Core domain logic for cpfcheck
//!
//! This module contains pure logic with no I/O dependencies.
//! UI interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Cpf, ParseError, Verdict)
//! - `services/` - Validation, check digits, formatting
//! - `ports/` - Trait definitions for the input field and feedback element

pub mod models;
pub mod ports;
pub mod services;
