use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use math_latex::{
    Delimiters, Expression, FormatError, LatexFormatter, MulOperator, add, div, example_matrix,
    fraction, integral, lim, log, matrix, mul, nth_root, product, row, sqrt, sub, subscript,
    subscript_superscript, sum, superscript,
};
use serde::Deserialize;

type Expr = Expression<'static>;

/// A list of formulas, written as `[[formula]]` tables.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(rename = "formula")]
    pub formulas: Vec<Formula>,
}

/// One LaTeX construct and its operands, tagged by `kind`.
///
/// ```toml
/// [[formula]]
/// kind = "fraction"
/// numerator = 1
/// denominator = "n"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Formula {
    Subscript {
        base: Expr,
        script: Expr,
    },
    Superscript {
        base: Expr,
        script: Expr,
    },
    SubscriptSuperscript {
        base: Expr,
        sub: Expr,
        sup: Expr,
    },
    Row {
        cells: Vec<Expr>,
    },
    /// Without `brackets`, the configured default is used.
    Matrix {
        rows: Vec<Vec<Expr>>,
        #[serde(default)]
        brackets: Option<Delimiters>,
    },
    ExampleMatrix {
        rows: Vec<Vec<Expr>>,
        #[serde(default)]
        brackets: Option<Delimiters>,
    },
    Fraction {
        numerator: Expr,
        denominator: Expr,
    },
    Sum {
        start: Expr,
        end: Expr,
        term: Expr,
    },
    Product {
        start: Expr,
        end: Expr,
        term: Expr,
    },
    Integral {
        start: Expr,
        end: Expr,
        term: Expr,
    },
    Add {
        terms: Vec<Expr>,
    },
    Sub {
        terms: Vec<Expr>,
    },
    /// Without `operator`, the configured default is used.
    Mul {
        terms: Vec<Expr>,
        #[serde(default)]
        operator: Option<MulOperator>,
    },
    Div {
        terms: Vec<Expr>,
    },
    Sqrt {
        base: Expr,
    },
    Root {
        base: Expr,
        n: Expr,
    },
    Log {
        base: Expr,
        exp: Expr,
    },
    Lim {
        base: Expr,
        exp: Expr,
    },
}

impl Formula {
    pub fn render(&self, formatter: &LatexFormatter) -> Result<String, FormatError> {
        let output = match self {
            Formula::Subscript { base, script } => subscript(base, script),
            Formula::Superscript { base, script } => superscript(base, script),
            Formula::SubscriptSuperscript { base, sub, sup } => {
                subscript_superscript(base, sub, sup)
            }
            Formula::Row { cells } => row(cells),
            Formula::Matrix { rows, brackets } => match brackets {
                Some(delimiters) => matrix(rows, Some(delimiters.pair())),
                None => formatter.matrix(rows),
            },
            Formula::ExampleMatrix { rows, brackets } => match brackets {
                Some(delimiters) => example_matrix(rows, Some(delimiters.pair()))?,
                None => formatter.example_matrix(rows)?,
            },
            Formula::Fraction {
                numerator,
                denominator,
            } => fraction(numerator, denominator),
            Formula::Sum { start, end, term } => sum(start, end, term),
            Formula::Product { start, end, term } => product(start, end, term),
            Formula::Integral { start, end, term } => integral(start, end, term),
            Formula::Add { terms } => add(terms),
            Formula::Sub { terms } => sub(terms),
            Formula::Mul { terms, operator } => match operator {
                Some(operator) => mul(terms, *operator),
                None => formatter.mul(terms),
            },
            Formula::Div { terms } => div(terms),
            Formula::Sqrt { base } => sqrt(base),
            Formula::Root { base, n } => nth_root(base, n),
            Formula::Log { base, exp } => log(base, exp),
            Formula::Lim { base, exp } => lim(base, exp),
        };
        Ok(output)
    }
}

/// Error type for loading and rendering documents.
#[derive(Debug)]
pub enum DocumentError {
    /// I/O error when reading the file.
    Io(io::Error),
    /// TOML parsing error, together with the text that failed to parse.
    Parse(toml::de::Error, String),
    /// The formula with the given index could not be formatted.
    Format(usize, FormatError),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::Io(err) => write!(f, "I/O error: {}", err),
            DocumentError::Parse(err, _) => write!(f, "TOML parsing error: {}", err),
            DocumentError::Format(idx, err) => write!(f, "formula {}: {}", idx + 1, err),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::Io(err) => Some(err),
            DocumentError::Parse(err, _) => Some(err),
            DocumentError::Format(_, err) => Some(err),
        }
    }
}

impl From<io::Error> for DocumentError {
    fn from(err: io::Error) -> Self {
        DocumentError::Io(err)
    }
}

/// Loads a document from `path`, or from stdin if `path` is `-`.
pub fn load_document(path: &Path) -> Result<Document, DocumentError> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    let result = parse_document(&content);
    result.map_err(|err| DocumentError::Parse(err, content))
}

#[inline]
fn parse_document(s: &str) -> Result<Document, toml::de::Error> {
    toml::from_str(s)
}

/// Renders every formula of `document`, one per line.
pub fn render_document(
    document: &Document,
    formatter: &LatexFormatter,
) -> Result<Vec<String>, DocumentError> {
    document
        .formulas
        .iter()
        .enumerate()
        .map(|(idx, formula)| {
            formula
                .render(formatter)
                .map_err(|err| DocumentError::Format(idx, err))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use math_latex::FormatConfig;

    use super::*;

    fn render_all(toml_content: &str, config: FormatConfig) -> Vec<String> {
        let document = parse_document(toml_content).unwrap();
        render_document(&document, &LatexFormatter::new(config)).unwrap()
    }

    #[test]
    fn test_full_document() {
        let toml_content = r#"
[[formula]]
kind = "fraction"
numerator = 1
denominator = 2.0

[[formula]]
kind = "sum"
start = "i=1"
end = "n"
term = "x_i"

[[formula]]
kind = "matrix"
rows = [["x+y", 2], [3, 4]]
brackets = "paren"

[[formula]]
kind = "mul"
terms = ["a", { re = 1, im = 1 }]
operator = "times"

[[formula]]
kind = "root"
base = "b"
n = 2
"#;
        let lines = render_all(toml_content, FormatConfig::default());
        assert_eq!(
            lines,
            [
                r"\frac{1}{2.0}",
                r"\sum_{i=1}^{n}x_i",
                r"\left(\begin{matrix}x+y & 2\\3 & 4\end{matrix}\right)",
                r"a \times 1+1i",
                r"\sqrt{b}",
            ]
        );
    }

    #[test]
    fn test_config_defaults_apply() {
        let toml_content = r#"
[[formula]]
kind = "mul"
terms = [2, "x"]

[[formula]]
kind = "matrix"
rows = [[1]]
"#;
        let config = FormatConfig {
            matrix_brackets: Some(Delimiters::Vert),
            mul_operator: MulOperator::Cdot,
        };
        let lines = render_all(toml_content, config);
        assert_eq!(
            lines,
            [r"2 \cdot x", r"\left|\begin{matrix}1\end{matrix}\right|"]
        );
    }

    #[test]
    fn test_empty_document() {
        let document = parse_document("").unwrap();
        assert!(document.formulas.is_empty());
    }

    #[test]
    fn test_shape_error_is_reported_with_index() {
        let toml_content = r#"
[[formula]]
kind = "sqrt"
base = 2

[[formula]]
kind = "example-matrix"
rows = [[1, 2], [3, 4]]
"#;
        let document = parse_document(toml_content).unwrap();
        let err = render_document(&document, &LatexFormatter::default()).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Format(1, FormatError::Shape { rows: 2, .. })
        ));
        assert_eq!(
            err.to_string(),
            "formula 2: Matrix must be 4x4, but it has 2 rows."
        );
    }

    #[test]
    fn test_unknown_kind_and_bad_operand() {
        assert!(parse_document("[[formula]]\nkind = \"tensor\"\n").is_err());
        let err = parse_document("[[formula]]\nkind = \"sqrt\"\nbase = true\n").unwrap_err();
        assert!(err.to_string().contains("Unsupported expression type"), "{err}");
    }
}
