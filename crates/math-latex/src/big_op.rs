//! Large operators with limits: sums, products, integrals, logarithms and limits.
//!
//! The operand follows the operator directly, without a separator, so `sum(1, "n", "x_i")` gives
//! `\sum_{1}^{n}x_i`.

use crate::expression::{Expression, normalize};
use crate::script::{subscript, subscript_superscript};

/// `\sum_{start}^{end}term`
pub fn sum<'a, 'b, 'c>(
    start: impl Into<Expression<'a>>,
    end: impl Into<Expression<'b>>,
    term: impl Into<Expression<'c>>,
) -> String {
    bounded(r"\sum", start, end, term)
}

/// `\prod_{start}^{end}term`
pub fn product<'a, 'b, 'c>(
    start: impl Into<Expression<'a>>,
    end: impl Into<Expression<'b>>,
    term: impl Into<Expression<'c>>,
) -> String {
    bounded(r"\prod", start, end, term)
}

/// `\int_{start}^{end}term`
pub fn integral<'a, 'b, 'c>(
    start: impl Into<Expression<'a>>,
    end: impl Into<Expression<'b>>,
    term: impl Into<Expression<'c>>,
) -> String {
    bounded(r"\int", start, end, term)
}

/// `\log_{base}exp`
pub fn log<'a, 'b>(base: impl Into<Expression<'a>>, exp: impl Into<Expression<'b>>) -> String {
    indexed(r"\log", base, exp)
}

/// `\lim_{base}exp`
pub fn lim<'a, 'b>(base: impl Into<Expression<'a>>, exp: impl Into<Expression<'b>>) -> String {
    indexed(r"\lim", base, exp)
}

fn bounded<'a, 'b, 'c>(
    op: &'static str,
    start: impl Into<Expression<'a>>,
    end: impl Into<Expression<'b>>,
    term: impl Into<Expression<'c>>,
) -> String {
    let mut output = subscript_superscript(op, start, end);
    output.push_str(&normalize(term));
    output
}

fn indexed<'a, 'b>(
    op: &'static str,
    index: impl Into<Expression<'a>>,
    operand: impl Into<Expression<'b>>,
) -> String {
    let mut output = subscript(op, index);
    output.push_str(&normalize(operand));
    output
}
