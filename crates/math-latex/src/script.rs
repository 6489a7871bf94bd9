use crate::expression::{Expression, normalize};
use crate::wrap::wrap;

/// `base_{s}`
pub fn subscript<'a, 'b>(base: impl Into<Expression<'a>>, s: impl Into<Expression<'b>>) -> String {
    attach(base, '_', s)
}

/// `base^{s}`
pub fn superscript<'a, 'b>(
    base: impl Into<Expression<'a>>,
    s: impl Into<Expression<'b>>,
) -> String {
    attach(base, '^', s)
}

/// `base_{sub}^{sup}`
///
/// The subscript is attached first and the superscript is attached to the result, so this is the
/// same as `superscript(subscript(base, sub), sup)`.
pub fn subscript_superscript<'a, 'b, 'c>(
    base: impl Into<Expression<'a>>,
    sub: impl Into<Expression<'b>>,
    sup: impl Into<Expression<'c>>,
) -> String {
    superscript(subscript(base, sub), sup)
}

fn attach<'a, 'b>(
    base: impl Into<Expression<'a>>,
    marker: char,
    script: impl Into<Expression<'b>>,
) -> String {
    let mut output = normalize(base).into_owned();
    output.push(marker);
    output.push_str(&wrap(script, "{", "}"));
    output
}
