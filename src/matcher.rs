use std::borrow::Cow;
use std::fmt;

use log::{debug, trace};

use crate::ast::Regex;

/// Runs a regex over input one symbol at a time.
///
/// The matcher keeps a single "current" regex: the derivative of the pattern by everything seen
/// so far. It starts out as the pattern itself (borrowed, not copied), and accepts exactly when
/// the current regex is nullable.
#[derive(Debug, Clone)]
pub struct Matcher<'a, T: Clone> {
    pattern: &'a Regex<T>,
    current: Cow<'a, Regex<T>>,
    derivations: usize,
}

impl<'a, T: Clone + PartialEq + fmt::Display> Matcher<'a, T> {
    pub fn new(pattern: &'a Regex<T>) -> Matcher<'a, T> {
        Matcher {
            pattern,
            current: Cow::Borrowed(pattern),
            derivations: 0,
        }
    }

    /// Forget all input seen so far.
    pub fn reset(&mut self) {
        self.current = Cow::Borrowed(self.pattern);
        self.derivations = 0;
    }

    /// Consume one symbol of input.
    pub fn advance(&mut self, sym: &T) {
        self.current = Cow::Owned(self.current.derive(sym).normalize());
        self.derivations += 1;
        trace!(
            "derivation {} by {}: {} ({} nodes)",
            self.derivations,
            sym,
            self.current,
            self.current.size()
        );
    }

    /// Does the pattern match the input seen so far?
    pub fn accepts(&self) -> bool {
        self.current.delta().is_empty_string()
    }

    /// Is the current regex `NoMatch`? If so, no further input can ever be accepted.
    pub fn is_dead(&self) -> bool {
        self.current.is_no_match()
    }

    pub fn current(&self) -> &Regex<T> {
        &self.current
    }

    /// How many derivatives have been taken since the matcher was created or last reset.
    pub fn derivations(&self) -> usize {
        self.derivations
    }

    /// Does the _entire_ input match the pattern? Resets the matcher first.
    pub fn is_match(&mut self, input: impl IntoIterator<Item = T>) -> bool {
        self.reset();
        for sym in input {
            if self.is_dead() {
                debug!(
                    "no match possible after {} symbols, stopping before {}",
                    self.derivations, sym
                );
                return false;
            }
            self.advance(&sym);
        }
        self.accepts()
    }
}

/// Does `pattern` match the whole of `subject`?
pub fn matches<T: Clone + PartialEq + fmt::Display>(
    pattern: &Regex<T>,
    subject: impl IntoIterator<Item = T>,
) -> bool {
    Matcher::new(pattern).is_match(subject)
}

impl Regex<char> {
    /// Does this regex match the whole of `input`?
    pub fn is_match(&self, input: &str) -> bool {
        matches(self, input.chars())
    }
}
