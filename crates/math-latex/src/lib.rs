//! Format structured mathematical expressions as LaTeX.
//!
//! Every function in this crate takes one or more [`Expression`]s, normalizes them to their
//! canonical text and composes a LaTeX fragment from fixed templates. Since text expressions are
//! passed through unchanged, the output of one function can be used as the input of another.
//!
//! # Usage
//!
//! ```rust
//! use math_latex::{MulOperator, fraction, mul, sqrt, sum, superscript};
//!
//! let term = fraction(1, superscript("n", 2));
//! assert_eq!(sum("n=1", r"\infty", &term), r"\sum_{n=1}^{\infty}\frac{1}{n^{2}}");
//!
//! let r2 = superscript("r", 2);
//! assert_eq!(mul([r"\pi", r2.as_str()], MulOperator::Cdot), r"\pi \cdot r^{2}");
//! assert_eq!(mul([2, 3], MulOperator::Implicit), "23");
//! assert_eq!(sqrt(2), r"\sqrt{2}");
//! ```
//!
//! The options of [`matrix`], [`example_matrix`] and [`mul`] can also be fixed once in a
//! [`FormatConfig`] and applied through a [`LatexFormatter`].
//!
//! # Features
//!
//! - `serde`: `Expression`, `FormatConfig` and the option enums implement serde's `Deserialize`.
//!
mod arith;
mod big_op;
mod error;
mod expression;
mod matrix;
mod script;
mod symbol;
mod wrap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::arith::{add, div, fraction, mul, nth_root, sqrt, sub};
pub use self::big_op::{integral, lim, log, product, sum};
pub use self::error::FormatError;
pub use self::expression::{Expression, normalize, normalize_all};
pub use self::matrix::{example_matrix, matrix, row};
pub use self::script::{subscript, subscript_superscript, superscript};
pub use self::symbol::{Ellipsis, MulOperator, ellipsis_symbol, mul_symbol};
pub use self::wrap::{BracketPair, Delimiters, brackets, wrap, wrap_environment};

/// Default options for the formatting functions that take them.
///
/// # Example usage
///
/// ```rust
/// use math_latex::{Delimiters, FormatConfig, MulOperator};
///
/// // Default values: no brackets around matrices, implicit multiplication.
/// let config = FormatConfig::default();
///
/// let config = FormatConfig {
///     matrix_brackets: Some(Delimiters::Square),
///     mul_operator: MulOperator::Cdot,
/// };
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct FormatConfig {
    /// Brackets placed around [`matrix`] and [`example_matrix`] output.
    pub matrix_brackets: Option<Delimiters>,
    /// The operator used by [`mul`].
    pub mul_operator: MulOperator,
}

/// Applies a [`FormatConfig`] to the functions with optional parameters.
///
/// The remaining functions take no options and are used directly.
#[derive(Debug, Clone, Default)]
pub struct LatexFormatter {
    config: FormatConfig,
}

impl LatexFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// [`matrix`] with the configured brackets.
    pub fn matrix<'a, R>(&self, rows: R) -> String
    where
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: Into<Expression<'a>>,
    {
        matrix(rows, self.bracket_pair())
    }

    /// [`example_matrix`] with the configured brackets.
    pub fn example_matrix<'a, R>(&self, rows: R) -> Result<String, FormatError>
    where
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: Into<Expression<'a>>,
    {
        example_matrix(rows, self.bracket_pair())
    }

    /// [`mul`] with the configured operator.
    pub fn mul<'a, I>(&self, terms: I) -> String
    where
        I: IntoIterator,
        I::Item: Into<Expression<'a>>,
    {
        mul(terms, self.config.mul_operator)
    }

    #[inline]
    fn bracket_pair(&self) -> Option<BracketPair<'static>> {
        self.config.matrix_brackets.map(Delimiters::pair)
    }
}

static_assertions::assert_impl_all!(Expression<'static>: Send, Sync);
static_assertions::assert_impl_all!(FormatConfig: Send, Sync, Copy);
static_assertions::assert_impl_all!(LatexFormatter: Send, Sync);
static_assertions::assert_impl_all!(FormatError: Send, Sync, std::error::Error);
