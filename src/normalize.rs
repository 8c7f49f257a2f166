use crate::ast::{alt, closure, seq, Regex};

impl<T: Clone> Regex<T> {
    /// Simplify bottom-up, absorbing `NoMatch` and `EmptyString` wherever that cannot change the
    /// language. Without this, repeated derivatives grow exponentially.
    ///
    /// The rules are checked against the already-normalized children, so `normalize` is
    /// idempotent.
    pub fn normalize(&self) -> Regex<T> {
        use Regex::*;

        match self {
            EmptyString | NoMatch | Symbol(_) => self.clone(),
            Sequence(x, y) => match (x.normalize(), y.normalize()) {
                (NoMatch, _) | (_, NoMatch) => NoMatch,
                (EmptyString, y) => y,
                (x, EmptyString) => x,
                (x, y) => seq(x, y),
            },
            Alternation(x, y) => match (x.normalize(), y.normalize()) {
                (NoMatch, y) => y,
                (x, NoMatch) => x,
                (x, y) => alt(x, y),
            },
            // Never collapsed: even `∅*` still matches the empty string.
            Closure(x) => closure(x.normalize()),
        }
    }
}
