//! Tokenization into de-duplicated token sets.

use super::normalize::normalize;
use std::collections::HashSet;

/// A set of normalized tokens.
///
/// Membership drives all scoring. The source word sequence, repeats
/// included, is kept alongside so multi-word synonym phrases can be
/// recognized as contiguous runs.
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    order: Vec<String>,
    members: HashSet<String>,
    /// Words as they appeared in the source text; not touched by `insert`
    words: Vec<String>,
}

impl TokenSet {
    /// Create an empty token set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token, returning false if it was already present
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if token.is_empty() || self.members.contains(&token) {
            return false;
        }
        self.members.insert(token.clone());
        self.order.push(token);
        true
    }

    pub fn contains(&self, token: &str) -> bool {
        self.members.contains(token)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate tokens in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of tokens present in both sets
    pub fn intersection_count(&self, other: &TokenSet) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().filter(|t| large.contains(t)).count()
    }

    /// Number of distinct tokens across both sets
    pub fn union_count(&self, other: &TokenSet) -> usize {
        self.len() + other.len() - self.intersection_count(other)
    }

    /// Source words in text order, repeats included
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Check whether `words` occur as a contiguous run in the source text
    pub fn contains_run(&self, words: &[&str]) -> bool {
        match words.len() {
            0 => false,
            1 => self.contains(words[0]),
            n => self
                .words
                .windows(n)
                .any(|window| window.iter().zip(words).all(|(a, b)| a == b)),
        }
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for token in iter {
            if token.is_empty() {
                continue;
            }
            set.words.push(token.clone());
            set.insert(token);
        }
        set
    }
}

impl<'a> FromIterator<&'a str> for TokenSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

impl PartialEq for TokenSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for TokenSet {}

/// Normalize text and split it on whitespace into a token set.
///
/// Empty or punctuation-only input yields an empty set.
pub fn tokenize(text: &str) -> TokenSet {
    normalize(text).split_whitespace().collect()
}
