use insta::assert_snapshot;
use math_latex::{
    BracketPair, Expression, FormatError, MulOperator, add, div, example_matrix, fraction,
    integral, lim, log, matrix, mul, nth_root, product, sqrt, sub, subscript,
    subscript_superscript, sum, superscript,
};
use num_complex::Complex64;

fn mixed_matrix() -> [[Expression<'static>; 2]; 2] {
    [
        [Expression::from("x+y"), Expression::from(2)],
        [Expression::from(3), Expression::from(4)],
    ]
}

#[test]
fn test_matrix() {
    let output = matrix(&mixed_matrix(), None);
    assert_eq!(
        output.replace(' ', ""),
        r"\begin{matrix}x+y&2\\3&4\end{matrix}"
    );
    assert_snapshot!(output, @r"\begin{matrix}x+y & 2\\3 & 4\end{matrix}");
}

#[test]
fn test_matrix_brackets() {
    let output = matrix(&mixed_matrix(), Some(("(", ")").into()));
    assert_eq!(
        output.replace(' ', ""),
        r"\left(\begin{matrix}x+y&2\\3&4\end{matrix}\right)"
    );
    assert_snapshot!(
        matrix([[1.0, 0.0], [0.0, 1.0]], Some(BracketPair::SQUARE)),
        @r"\left[\begin{matrix}1.0 & 0.0\\0.0 & 1.0\end{matrix}\right]"
    );
}

#[test]
fn test_example_matrix() {
    let rows = [
        ["a_{11}", "a_{12}", "", "a_{1n}"],
        ["a_{21}", "a_{22}", "", "a_{2n}"],
        ["", "", "", ""],
        ["a_{m1}", "a_{m2}", "", "a_{mn}"],
    ];
    assert_snapshot!(
        example_matrix(rows, Some(BracketPair::PAREN)).unwrap(),
        @r"\left(\begin{matrix}a_{11} & a_{12} & \cdots & a_{1n}\\a_{21} & a_{22} & \cdots & a_{2n}\\\vdots & \vdots & \ddots & \vdots\\a_{m1} & a_{m2} & \cdots & a_{mn}\end{matrix}\right)"
    );
}

#[test]
fn test_example_matrix_wrong_shape() {
    let three = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];
    let err = example_matrix(three, None).unwrap_err();
    assert!(err.is_shape_error());
    assert_snapshot!(err.to_string(), @"Matrix must be 4x4, but it has 3 rows.");

    let wide = vec![vec![0; 5]; 4];
    assert_eq!(
        example_matrix(wide, None),
        Err(FormatError::Shape {
            rows: 4,
            bad_row: Some((0, 5)),
        })
    );
}

#[test]
fn test_scripts() {
    assert_snapshot!(subscript("x", "y"), @"x_{y}");
    assert_snapshot!(superscript("x", "y"), @"x^{y}");
    assert_snapshot!(subscript_superscript("x", "i", "2"), @"x_{i}^{2}");
    assert_snapshot!(subscript_superscript("T", "ij", "k"), @"T_{ij}^{k}");
}

#[test]
fn test_fraction_and_roots() {
    assert_snapshot!(fraction("a", "b"), @r"\frac{a}{b}");
    assert_snapshot!(fraction(sqrt("x"), 2), @r"\frac{\sqrt{x}}{2}");
    assert_eq!(nth_root("b", 2), sqrt("b"));
    assert_snapshot!(nth_root("b", 2), @r"\sqrt{b}");
    assert_snapshot!(nth_root("b", 3), @r"\sqrt[3]{b}");
}

#[test]
fn test_arithmetic() {
    assert_snapshot!(add(["a", "b", "c"]), @"a + b + c");
    assert_snapshot!(sub([Expression::from("x"), Expression::from(1)]), @"x - 1");
    assert_snapshot!(div([6, 3]), @r"6 \div 3");
    assert_eq!(mul(["a", "b"], MulOperator::Implicit), "ab");
    assert_eq!(mul(["a", "b"], MulOperator::Times), r"a \times b");
    assert_snapshot!(
        mul([Expression::from(2), Expression::from(Complex64::new(1.0, -1.0))], MulOperator::Cdot),
        @r"2 \cdot 1+-1i"
    );
}

#[test]
fn test_big_operators() {
    assert_snapshot!(sum("i=1", "n", "i"), @r"\sum_{i=1}^{n}i");
    assert_snapshot!(product("k=1", "n", "k"), @r"\prod_{k=1}^{n}k");
    assert_snapshot!(integral(0, r"\infty", r"e^{-x}\,dx"), @r"\int_{0}^{\infty}e^{-x}\,dx");
    assert_snapshot!(log(2, "8"), @r"\log_{2}8");
    assert_snapshot!(lim(r"n \to \infty", fraction(1, "n")), @r"\lim_{n \to \infty}\frac{1}{n}");
}

#[test]
fn test_composition() {
    let term = fraction(1, superscript("n", 2));
    let series = sum("n=1", r"\infty", &term);
    let rhs = fraction(superscript(r"\pi", 2), 6);
    assert_snapshot!(
        [series, rhs].join(" = "),
        @r"\sum_{n=1}^{\infty}\frac{1}{n^{2}} = \frac{\pi^{2}}{6}"
    );
}
