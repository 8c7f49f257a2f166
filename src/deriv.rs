use crate::ast::{alt, closure, seq, Regex};

impl<T: Clone + PartialEq> Regex<T> {
    /// Nullability, as a regex: `EmptyString` if this regex accepts the empty string, and
    /// `NoMatch` otherwise. Never returns anything else.
    pub fn delta(&self) -> Regex<T> {
        if self.is_nullable() {
            Regex::EmptyString
        } else {
            Regex::NoMatch
        }
    }

    /// Does this regex accept the empty string?
    pub fn is_nullable(&self) -> bool {
        use Regex::*;

        match self {
            EmptyString => true,
            NoMatch | Symbol(_) => false,
            Sequence(x, y) => x.is_nullable() && y.is_nullable(),
            Alternation(x, y) => x.is_nullable() || y.is_nullable(),
            Closure(_) => true,
        }
    }

    /// The Brzozowski derivative with respect to `sym`: a regex matching `w` exactly when this
    /// regex matches `sym` followed by `w`.
    ///
    /// The result is not simplified, and can be much larger than `self`. See `normalize`.
    pub fn derive(&self, sym: &T) -> Regex<T> {
        use Regex::*;

        match self {
            EmptyString | NoMatch => NoMatch,
            Symbol(sym2) if sym2 == sym => EmptyString,
            Symbol(_) => NoMatch,
            // The split point between `x` and `y` is unknown, so keep both: either `x` is already
            // done and `y` consumes the symbol, or `x` consumes it.
            Sequence(x, y) => alt(
                seq(x.delta(), y.derive(sym)),
                seq(x.derive(sym), (**y).clone()),
            ),
            Alternation(x, y) => alt(x.derive(sym), y.derive(sym)),
            Closure(x) => seq(x.derive(sym), closure((**x).clone())),
        }
    }
}
