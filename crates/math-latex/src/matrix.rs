use std::borrow::Cow;

use crate::error::FormatError;
use crate::expression::{Expression, normalize_all};
use crate::symbol::Ellipsis;
use crate::wrap::{BracketPair, brackets, wrap_environment};

/// Row and column of a pattern matrix that are replaced by dots.
const PATTERN_INDEX: usize = 2;
const PATTERN_SIZE: usize = 4;

/// Joins the cells of one matrix row with `" & "`.
pub fn row<'a, I>(cells: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Expression<'a>>,
{
    normalize_all(cells).join(" & ")
}

/// Formats `rows` as a `matrix` environment, optionally inside auto-sized brackets.
///
/// ```rust
/// use math_latex::{BracketPair, Expression, matrix};
///
/// let rows = [
///     [Expression::from("x+y"), Expression::from(2)],
///     [Expression::from(3), Expression::from(4)],
/// ];
/// assert_eq!(
///     matrix(&rows, Some(BracketPair::PAREN)),
///     r"\left(\begin{matrix}x+y & 2\\3 & 4\end{matrix}\right)"
/// );
/// ```
pub fn matrix<'a, R>(rows: R, bracket_pair: Option<BracketPair<'_>>) -> String
where
    R: IntoIterator,
    R::Item: IntoIterator,
    <R::Item as IntoIterator>::Item: Into<Expression<'a>>,
{
    let body = rows.into_iter().map(row).collect::<Vec<_>>().join(r"\\");
    let body = wrap_environment(&body, "matrix");
    match bracket_pair {
        Some(pair) => brackets(&body, pair),
        None => body,
    }
}

/// Formats a 4x4 matrix as the pattern of a general N-dimensional matrix.
///
/// The third row and the third column are replaced by dots: `\cdots` for the omitted columns,
/// `\vdots` for the omitted rows and `\ddots` where the two meet. All other cells keep their
/// value. Anything other than exactly four rows of four cells is a [`FormatError::Shape`].
pub fn example_matrix<'a, R>(
    rows: R,
    bracket_pair: Option<BracketPair<'_>>,
) -> Result<String, FormatError>
where
    R: IntoIterator,
    R::Item: IntoIterator,
    <R::Item as IntoIterator>::Item: Into<Expression<'a>>,
{
    let rows: Vec<Vec<Expression<'a>>> = rows
        .into_iter()
        .map(|cells| cells.into_iter().map(Into::into).collect())
        .collect();
    check_shape(&rows)?;
    let pattern = rows.into_iter().enumerate().map(|(i, cells)| {
        cells
            .into_iter()
            .enumerate()
            .map(move |(j, cell)| pattern_cell(i, j, cell))
    });
    Ok(matrix(pattern, bracket_pair))
}

fn check_shape(rows: &[Vec<Expression<'_>>]) -> Result<(), FormatError> {
    if rows.len() != PATTERN_SIZE {
        return Err(FormatError::Shape {
            rows: rows.len(),
            bad_row: None,
        });
    }
    match rows
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != PATTERN_SIZE)
    {
        Some((idx, cells)) => Err(FormatError::Shape {
            rows: rows.len(),
            bad_row: Some((idx, cells.len())),
        }),
        None => Ok(()),
    }
}

fn pattern_cell(i: usize, j: usize, cell: Expression<'_>) -> Expression<'_> {
    let dots = match (i == PATTERN_INDEX, j == PATTERN_INDEX) {
        (false, false) => return cell,
        (false, true) => Ellipsis::Column,
        (true, false) => Ellipsis::Row,
        (true, true) => Ellipsis::Diagonal,
    };
    Expression::Text(Cow::Borrowed(dots.symbol()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize, m: usize) -> Vec<Vec<usize>> {
        (0..n)
            .map(|i| (0..m).map(|j| 10 * i + j).collect())
            .collect()
    }

    #[test]
    fn single_row() {
        assert_eq!(row(["a", "b", "c"]), "a & b & c");
        assert_eq!(row([1.5]), "1.5");
        assert_eq!(row(Vec::<i32>::new()), "");
    }

    #[test]
    fn plain_matrix() {
        assert_eq!(
            matrix([[1, 2], [3, 4]], None),
            r"\begin{matrix}1 & 2\\3 & 4\end{matrix}"
        );
    }

    #[test]
    fn pattern_cells() {
        assert_eq!(pattern_cell(0, 0, Expression::Int(7)), Expression::Int(7));
        assert_eq!(pattern_cell(3, 2, Expression::Int(7)), Expression::from(r"\cdots"));
        assert_eq!(pattern_cell(2, 0, Expression::Int(7)), Expression::from(r"\vdots"));
        assert_eq!(pattern_cell(2, 2, Expression::Int(7)), Expression::from(r"\ddots"));
    }

    #[test]
    fn pattern_matrix() {
        let output = example_matrix(grid(4, 4), None).unwrap();
        assert_eq!(
            output,
            concat!(
                r"\begin{matrix}",
                r"0 & 1 & \cdots & 3\\",
                r"10 & 11 & \cdots & 13\\",
                r"\vdots & \vdots & \ddots & \vdots\\",
                r"30 & 31 & \cdots & 33",
                r"\end{matrix}"
            )
        );
    }

    #[test]
    fn pattern_matrix_shape() {
        assert_eq!(
            example_matrix(grid(3, 3), None),
            Err(FormatError::Shape {
                rows: 3,
                bad_row: None
            })
        );
        assert_eq!(
            example_matrix(grid(5, 5), None),
            Err(FormatError::Shape {
                rows: 5,
                bad_row: None
            })
        );
        let mut ragged = grid(4, 4);
        ragged[3].push(99);
        assert_eq!(
            example_matrix(ragged, None),
            Err(FormatError::Shape {
                rows: 4,
                bad_row: Some((3, 5))
            })
        );
    }
}
