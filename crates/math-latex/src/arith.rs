use crate::expression::{Expression, normalize, normalize_all};
use crate::symbol::MulOperator;
use crate::wrap::wrap;

/// `\frac{numerator}{denominator}`
pub fn fraction<'a, 'b>(
    numerator: impl Into<Expression<'a>>,
    denominator: impl Into<Expression<'b>>,
) -> String {
    let mut output = String::from(r"\frac");
    output.push_str(&wrap(numerator, "{", "}"));
    output.push_str(&wrap(denominator, "{", "}"));
    output
}

/// Joins `terms` with `" + "`.
pub fn add<'a, I>(terms: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Expression<'a>>,
{
    normalize_all(terms).join(" + ")
}

/// Joins `terms` with `" - "`.
pub fn sub<'a, I>(terms: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Expression<'a>>,
{
    normalize_all(terms).join(" - ")
}

/// Joins `terms` with the symbol of `operator`.
///
/// With [`MulOperator::Implicit`] the terms are written next to each other without any
/// separator; every other operator is surrounded by single spaces.
///
/// ```rust
/// use math_latex::{MulOperator, mul};
///
/// assert_eq!(mul(["a", "b"], MulOperator::Implicit), "ab");
/// assert_eq!(mul(["a", "b"], MulOperator::Times), r"a \times b");
/// ```
pub fn mul<'a, I>(terms: I, operator: MulOperator) -> String
where
    I: IntoIterator,
    I::Item: Into<Expression<'a>>,
{
    let terms = normalize_all(terms);
    match operator.symbol() {
        "" => terms.concat(),
        symbol => terms.join([" ", symbol, " "].concat().as_str()),
    }
}

/// Joins `terms` with `" \div "`.
pub fn div<'a, I>(terms: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Expression<'a>>,
{
    normalize_all(terms).join(r" \div ")
}

/// `\sqrt{base}`
pub fn sqrt<'a>(base: impl Into<Expression<'a>>) -> String {
    let mut output = String::from(r"\sqrt");
    output.push_str(&wrap(base, "{", "}"));
    output
}

/// `\sqrt[n]{base}`, or plain [`sqrt`] when `n` is 2.
///
/// The degree is compared after normalization, so only an integer `2` or the text `"2"` select
/// the square root; the float `2.0` does not.
pub fn nth_root<'a, 'b>(base: impl Into<Expression<'a>>, n: impl Into<Expression<'b>>) -> String {
    let n = normalize(n);
    if n == "2" {
        return sqrt(base);
    }
    let mut output = String::from(r"\sqrt");
    output.push_str(&wrap(n, "[", "]"));
    output.push_str(&wrap(base, "{", "}"));
    output
}
