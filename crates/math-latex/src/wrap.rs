#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};

use crate::expression::{Expression, normalize};

/// An opening and a closing delimiter, for use after `\left` and `\right`.
///
/// A delimiter is either a single character, like `(`, or a macro, like `\langle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketPair<'a> {
    pub open: &'a str,
    pub close: &'a str,
}

impl BracketPair<'static> {
    pub const PAREN: BracketPair<'static> = BracketPair::new("(", ")");
    pub const SQUARE: BracketPair<'static> = BracketPair::new("[", "]");
    pub const BRACE: BracketPair<'static> = BracketPair::new(r"\{", r"\}");
    // The trailing space keeps the macro name from running into a letter in the body.
    pub const ANGLE: BracketPair<'static> = BracketPair::new(r"\langle ", r"\rangle");
    pub const VERT: BracketPair<'static> = BracketPair::new("|", "|");
    pub const DOUBLE_VERT: BracketPair<'static> = BracketPair::new(r"\|", r"\|");
}

impl<'a> BracketPair<'a> {
    #[inline]
    pub const fn new(open: &'a str, close: &'a str) -> Self {
        BracketPair { open, close }
    }
}

impl<'a> From<(&'a str, &'a str)> for BracketPair<'a> {
    #[inline]
    fn from((open, close): (&'a str, &'a str)) -> Self {
        BracketPair::new(open, close)
    }
}

/// The named bracket pairs, for configuration files and command-line options.
///
/// Names are kebab-case: `paren`, `square`, `brace`, `angle`, `vert`, `double-vert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Delimiters {
    Paren,
    Square,
    Brace,
    Angle,
    Vert,
    DoubleVert,
}

impl Delimiters {
    pub const fn pair(self) -> BracketPair<'static> {
        match self {
            Delimiters::Paren => BracketPair::PAREN,
            Delimiters::Square => BracketPair::SQUARE,
            Delimiters::Brace => BracketPair::BRACE,
            Delimiters::Angle => BracketPair::ANGLE,
            Delimiters::Vert => BracketPair::VERT,
            Delimiters::DoubleVert => BracketPair::DOUBLE_VERT,
        }
    }
}

impl From<Delimiters> for BracketPair<'static> {
    #[inline]
    fn from(delimiters: Delimiters) -> Self {
        delimiters.pair()
    }
}

/// Normalizes `value` and puts it between `open` and `close`, without adding whitespace.
pub fn wrap<'a>(value: impl Into<Expression<'a>>, open: &str, close: &str) -> String {
    let value = normalize(value);
    let mut output = String::with_capacity(open.len() + value.len() + close.len());
    output.push_str(open);
    output.push_str(&value);
    output.push_str(close);
    output
}

/// Puts `body` into the environment `name`, e.g. `\begin{matrix}...\end{matrix}`.
pub fn wrap_environment(body: &str, name: &str) -> String {
    let mut output = String::with_capacity(body.len() + 2 * name.len() + 14);
    output.push_str(r"\begin{");
    output.push_str(name);
    output.push('}');
    output.push_str(body);
    output.push_str(r"\end{");
    output.push_str(name);
    output.push('}');
    output
}

/// Puts `body` between auto-sized delimiters: `\left<open>` body `\right<close>`.
pub fn brackets(body: &str, pair: BracketPair<'_>) -> String {
    let mut output =
        String::with_capacity(body.len() + pair.open.len() + pair.close.len() + 11);
    output.push_str(r"\left");
    output.push_str(pair.open);
    output.push_str(body);
    output.push_str(r"\right");
    output.push_str(pair.close);
    output
}
