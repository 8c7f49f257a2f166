use std::fmt;

/// A regular expression over symbols of type `T`.
///
/// Regexes are plain immutable trees: every composite node owns its children, and the derivative
/// and normalization operations always build fresh trees rather than modifying one in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Regex<T = char> {
    /// Matches only the empty string.
    EmptyString,
    /// Matches nothing at all.
    NoMatch,
    /// Matches exactly one occurrence of the symbol.
    Symbol(T),
    /// Matches the first regex followed by the second.
    Sequence(Box<Regex<T>>, Box<Regex<T>>),
    /// Matches either regex.
    Alternation(Box<Regex<T>>, Box<Regex<T>>),
    /// Matches zero or more repetitions of the regex.
    Closure(Box<Regex<T>>),
}

impl<T> Regex<T> {
    pub fn is_empty_string(&self) -> bool {
        matches!(self, Regex::EmptyString)
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Regex::NoMatch)
    }

    /// The number of nodes in this regex.
    pub fn size(&self) -> usize {
        use Regex::*;

        match self {
            EmptyString | NoMatch | Symbol(_) => 1,
            Sequence(x, y) | Alternation(x, y) => 1 + x.size() + y.size(),
            Closure(x) => 1 + x.size(),
        }
    }
}

/****************/
/* Constructors */
/****************/

// These build exactly the node asked for. Simplification is `Regex::normalize`'s job.

pub fn empty_string<T>() -> Regex<T> {
    Regex::EmptyString
}

pub fn no_match<T>() -> Regex<T> {
    Regex::NoMatch
}

pub fn symbol<T>(sym: T) -> Regex<T> {
    Regex::Symbol(sym)
}

pub fn seq<T>(first: Regex<T>, second: Regex<T>) -> Regex<T> {
    Regex::Sequence(Box::new(first), Box::new(second))
}

pub fn alt<T>(left: Regex<T>, right: Regex<T>) -> Regex<T> {
    Regex::Alternation(Box::new(left), Box::new(right))
}

pub fn closure<T>(body: Regex<T>) -> Regex<T> {
    Regex::Closure(Box::new(body))
}

/// The regex matching exactly `symbols`, in order and nothing else.
///
/// It is built as a right-nested chain of sequences ending in `EmptyString`, so `"abc"` becomes
/// `(a (b (c ε)))`. No symbols at all gives `EmptyString`.
pub fn literal<T, I>(symbols: I) -> Regex<T>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: DoubleEndedIterator,
{
    symbols
        .into_iter()
        .rev()
        .fold(empty_string(), |rest, sym| seq(symbol(sym), rest))
}

impl<T: fmt::Display> fmt::Display for Regex<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Regex::*;

        match self {
            EmptyString => write!(f, "ε"),
            NoMatch => write!(f, "∅"),
            Symbol(sym) => write!(f, "{}", sym),
            Sequence(x, y) => write!(f, "({} {})", x, y),
            Alternation(x, y) => write!(f, "({} | {})", x, y),
            Closure(x) => write!(f, "({})*", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        assert_eq!(literal("".chars()), Regex::EmptyString);
        assert_eq!(
            literal("abc".chars()),
            seq(
                symbol('a'),
                seq(symbol('b'), seq(symbol('c'), empty_string()))
            )
        );
        assert_eq!(literal(vec![1, 2]), seq(symbol(1), seq(symbol(2), empty_string())));
    }

    #[test]
    fn sizes() {
        assert_eq!(empty_string::<char>().size(), 1);
        assert_eq!(no_match::<char>().size(), 1);
        assert_eq!(symbol('x').size(), 1);
        assert_eq!(closure(symbol('x')).size(), 2);
        assert_eq!(literal("abc".chars()).size(), 7);
        assert_eq!(alt(symbol('a'), closure(symbol('b'))).size(), 4);
    }

    #[test]
    fn variant_tags() {
        assert!(empty_string::<char>().is_empty_string());
        assert!(!empty_string::<char>().is_no_match());
        assert!(no_match::<char>().is_no_match());
        assert!(!closure(no_match::<char>()).is_no_match());
        assert!(!seq(empty_string::<char>(), empty_string()).is_empty_string());
    }

    #[test]
    fn display() {
        let digit = alt(symbol('0'), symbol('1'));
        let number = seq(symbol('1'), closure(digit));
        assert_eq!(number.to_string(), "(1 ((0 | 1))*)");
        assert_eq!(literal("ab".chars()).to_string(), "(a (b ε))");
        assert_eq!(alt(no_match(), symbol('z')).to_string(), "(∅ | z)");
    }
}
