//! Text analysis for FAQ matching.
//!
//! Normalization and tokenization shared by index building and
//! query processing, so both sides of a comparison see identical
//! token forms. Devanagari text passes through untouched.

mod normalize;
mod tokenize;

pub use normalize::{has_devanagari, normalize};
pub use tokenize::{tokenize, TokenSet};
