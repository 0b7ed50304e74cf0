//! textkit - small, stateless text and number utilities
//!
//! A library of pure functions over in-memory primitives: sequence maximum,
//! parity, iterative factorial, mean, text cleanup, vowel counting, and
//! Unicode-aware palindrome checking. Every call is synchronous,
//! deterministic, and free of shared state, so the whole surface is safe to
//! use from any number of threads without coordination.

pub mod num;
pub mod text;

// Re-export the full public surface at the crate root
pub use num::{factorial, is_even, maximum, mean, FactorialError};
pub use text::{clean_text, count_vowels, is_palindrome, PUNCTUATION, VOWELS};
