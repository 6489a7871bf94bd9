#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::IntoStaticStr;

/// The symbol placed between the factors of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MulOperator {
    /// Juxtaposition: the factors are written next to each other.
    #[default]
    #[strum(serialize = "")]
    Implicit,
    #[strum(serialize = r"\times")]
    Times,
    #[strum(serialize = r"\cdot")]
    Cdot,
    #[strum(serialize = r"\ast")]
    Ast,
    #[strum(serialize = r"\star")]
    Star,
    #[strum(serialize = r"\bullet")]
    Bullet,
    #[strum(serialize = r"\circ")]
    Circ,
    #[strum(serialize = r"\otimes")]
    Otimes,
    #[strum(serialize = r"\odot")]
    Odot,
}

static MUL_OPERATORS: phf::Map<&'static str, MulOperator> = phf::phf_map! {
    "" => MulOperator::Implicit,
    "implicit" => MulOperator::Implicit,
    "times" => MulOperator::Times,
    "cdot" => MulOperator::Cdot,
    "ast" => MulOperator::Ast,
    "star" => MulOperator::Star,
    "bullet" => MulOperator::Bullet,
    "circ" => MulOperator::Circ,
    "otimes" => MulOperator::Otimes,
    "odot" => MulOperator::Odot,
};

impl MulOperator {
    /// Looks up an operator by name, e.g. `"times"`. The empty name selects
    /// [`MulOperator::Implicit`].
    pub fn from_name(name: &str) -> Option<Self> {
        MUL_OPERATORS.get(name).copied()
    }

    /// The LaTeX symbol for this operator; empty for [`MulOperator::Implicit`].
    #[inline]
    pub fn symbol(self) -> &'static str {
        self.into()
    }
}

/// Dots standing in for omitted entries.
///
/// The variants are named after what they replace in a pattern matrix: a column placeholder
/// runs along a row (`\cdots`), a row placeholder runs down a column (`\vdots`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum Ellipsis {
    #[strum(serialize = r"\cdots")]
    Column,
    #[strum(serialize = r"\vdots")]
    Row,
    #[strum(serialize = r"\ddots")]
    Diagonal,
    #[strum(serialize = r"\ldots")]
    Baseline,
}

static ELLIPSES: phf::Map<&'static str, Ellipsis> = phf::phf_map! {
    "c" => Ellipsis::Column,
    "column" => Ellipsis::Column,
    "v" => Ellipsis::Row,
    "row" => Ellipsis::Row,
    "d" => Ellipsis::Diagonal,
    "diagonal" => Ellipsis::Diagonal,
    "l" => Ellipsis::Baseline,
    "baseline" => Ellipsis::Baseline,
};

impl Ellipsis {
    /// Looks up an ellipsis by its one-letter tag (`c`, `v`, `d`, `l`) or its full name.
    pub fn from_tag(tag: &str) -> Option<Self> {
        ELLIPSES.get(tag).copied()
    }

    #[inline]
    pub fn symbol(self) -> &'static str {
        self.into()
    }
}

/// Returns the LaTeX macro for the given kind of dots.
#[inline]
pub fn ellipsis_symbol(direction: Ellipsis) -> &'static str {
    direction.symbol()
}

/// Returns the LaTeX symbol for the given multiplication operator.
#[inline]
pub fn mul_symbol(selector: MulOperator) -> &'static str {
    selector.symbol()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_symbols() {
        assert_eq!(mul_symbol(MulOperator::Implicit), "");
        assert_eq!(mul_symbol(MulOperator::Times), r"\times");
        assert_eq!(mul_symbol(MulOperator::Cdot), r"\cdot");
        assert_eq!(MulOperator::default(), MulOperator::Implicit);
    }

    #[test]
    fn mul_operator_names() {
        assert_eq!(MulOperator::from_name(""), Some(MulOperator::Implicit));
        assert_eq!(MulOperator::from_name("times"), Some(MulOperator::Times));
        assert_eq!(MulOperator::from_name("odot"), Some(MulOperator::Odot));
        assert_eq!(MulOperator::from_name("Times"), None);
        assert_eq!(MulOperator::from_name(r"\times"), None);
    }

    #[test]
    fn ellipsis_tags() {
        assert_eq!(ellipsis_symbol(Ellipsis::Column), r"\cdots");
        assert_eq!(ellipsis_symbol(Ellipsis::Row), r"\vdots");
        assert_eq!(ellipsis_symbol(Ellipsis::Diagonal), r"\ddots");
        assert_eq!(Ellipsis::from_tag("c"), Some(Ellipsis::Column));
        assert_eq!(Ellipsis::from_tag("row"), Some(Ellipsis::Row));
        assert_eq!(
            Ellipsis::from_tag("l").map(Ellipsis::symbol),
            Some(r"\ldots")
        );
        assert_eq!(Ellipsis::from_tag("x"), None);
    }
}
