use std::fmt;

/// Represents an error that occurred while formatting an expression.
///
/// Formatting is otherwise infallible, so there are only two ways to get here: handing a
/// wrongly-shaped matrix to [`example_matrix`](crate::example_matrix), or feeding a dynamically
/// typed value (from a config file or a Python caller) that has no [`Expression`] form.
///
/// [`Expression`]: crate::Expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A pattern matrix did not have exactly four rows of exactly four cells.
    Shape {
        /// Number of rows that were passed.
        rows: usize,
        /// The first row (index, length) whose length was not four, if the row count was right.
        bad_row: Option<(usize, usize)>,
    },
    /// A value of the named type cannot be used as an expression.
    UnsupportedType(Box<str>),
}

impl FormatError {
    /// Returns the error message as a string.
    pub fn string(&self) -> String {
        match self {
            FormatError::Shape {
                bad_row: Some((idx, len)),
                ..
            } => {
                "Matrix must be 4x4, but row ".to_string()
                    + itoa::Buffer::new().format(*idx)
                    + " has "
                    + itoa::Buffer::new().format(*len)
                    + " columns."
            }
            FormatError::Shape {
                rows,
                bad_row: None,
            } => {
                "Matrix must be 4x4, but it has ".to_string()
                    + itoa::Buffer::new().format(*rows)
                    + " rows."
            }
            FormatError::UnsupportedType(name) => {
                "Unsupported expression type: ".to_string() + name + "."
            }
        }
    }

    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, FormatError::Shape { .. })
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string())
    }
}

impl std::error::Error for FormatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_messages() {
        let err = FormatError::Shape {
            rows: 3,
            bad_row: None,
        };
        assert_eq!(err.to_string(), "Matrix must be 4x4, but it has 3 rows.");
        let err = FormatError::Shape {
            rows: 4,
            bad_row: Some((1, 5)),
        };
        assert_eq!(
            err.to_string(),
            "Matrix must be 4x4, but row 1 has 5 columns."
        );
        assert!(err.is_shape_error());
        let err = FormatError::Shape {
            rows: 4,
            bad_row: Some((3, 12)),
        };
        assert_eq!(err.string(), "Matrix must be 4x4, but row 3 has 12 columns.");
    }

    #[test]
    fn unsupported_type_message() {
        let err = FormatError::UnsupportedType("bool".into());
        assert_eq!(err.to_string(), "Unsupported expression type: bool.");
        assert!(!err.is_shape_error());
    }
}
