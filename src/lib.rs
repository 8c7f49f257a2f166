//! Regular expression matching by Brzozowski derivatives.
//!
//! A [`Regex`] is built directly as a tree (there is no textual syntax). To match, take the
//! derivative of the regex with respect to each input symbol in turn, normalizing after every
//! step, and check whether what remains accepts the empty string.
//!
//! ```
//! use brzozowski::{alt, closure, seq, symbol};
//!
//! let integer = alt(symbol('0'), seq(symbol('1'), closure(alt(symbol('0'), symbol('1')))));
//! assert!(integer.is_match("1101"));
//! assert!(!integer.is_match("0101"));
//! ```

mod ast;
mod deriv;
mod matcher;
mod normalize;

pub use crate::ast::{alt, closure, empty_string, literal, no_match, seq, symbol, Regex};
pub use crate::matcher::{matches, Matcher};
