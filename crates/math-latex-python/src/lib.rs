use pyo3::exceptions::{PyOverflowError, PyTypeError, PyValueError};
use pyo3::types::{PyBool, PyComplex, PyFloat, PyInt, PyString, PyTuple};
use pyo3::{create_exception, prelude::*};

use math_latex::{BracketPair, Expression, FormatError, MulOperator};
use num_complex::Complex64;

create_exception!(_math_latex_rust, ShapeError, PyValueError);
create_exception!(_math_latex_rust, UnsupportedTypeError, PyTypeError);

type Expr = Expression<'static>;

/// Convert a Python value to its canonical LaTeX text.
#[pyfunction]
fn exp(value: &Bound<'_, PyAny>) -> PyResult<String> {
    Ok(expression(value)?.normalize().into_owned())
}

#[pyfunction]
fn subscript(base: &Bound<'_, PyAny>, s: &Bound<'_, PyAny>) -> PyResult<String> {
    Ok(math_latex::subscript(expression(base)?, expression(s)?))
}

#[pyfunction]
fn superscript(base: &Bound<'_, PyAny>, s: &Bound<'_, PyAny>) -> PyResult<String> {
    Ok(math_latex::superscript(expression(base)?, expression(s)?))
}

#[pyfunction]
fn subscript_superscript(
    base: &Bound<'_, PyAny>,
    sub: &Bound<'_, PyAny>,
    sup: &Bound<'_, PyAny>,
) -> PyResult<String> {
    Ok(math_latex::subscript_superscript(
        expression(base)?,
        expression(sub)?,
        expression(sup)?,
    ))
}

#[pyfunction]
fn arr2row(arr: &Bound<'_, PyAny>) -> PyResult<String> {
    Ok(math_latex::row(iter_expressions(arr)?))
}

/// Convert a matrix to LaTeX. `b` is an optional `(open, close)` pair of delimiters.
#[pyfunction]
#[pyo3(signature = (m, b=None))]
fn matrix(m: &Bound<'_, PyAny>, b: Option<(String, String)>) -> PyResult<String> {
    let pair = b.as_ref().map(|(open, close)| BracketPair::new(open, close));
    Ok(math_latex::matrix(rows(m)?, pair))
}

/// Create a 4x4 matrix with dots to show the pattern.
#[pyfunction]
#[pyo3(signature = (m, b=None))]
fn example_matrix(m: &Bound<'_, PyAny>, b: Option<(String, String)>) -> PyResult<String> {
    let pair = b.as_ref().map(|(open, close)| BracketPair::new(open, close));
    math_latex::example_matrix(rows(m)?, pair).map_err(format_error)
}

#[pyfunction]
fn fraction(numerator: &Bound<'_, PyAny>, denominator: &Bound<'_, PyAny>) -> PyResult<String> {
    Ok(math_latex::fraction(
        expression(numerator)?,
        expression(denominator)?,
    ))
}

#[pyfunction]
fn sum_latex(
    start: &Bound<'_, PyAny>,
    end: &Bound<'_, PyAny>,
    term: &Bound<'_, PyAny>,
) -> PyResult<String> {
    Ok(math_latex::sum(
        expression(start)?,
        expression(end)?,
        expression(term)?,
    ))
}

#[pyfunction]
fn product_latex(
    start: &Bound<'_, PyAny>,
    end: &Bound<'_, PyAny>,
    term: &Bound<'_, PyAny>,
) -> PyResult<String> {
    Ok(math_latex::product(
        expression(start)?,
        expression(end)?,
        expression(term)?,
    ))
}

#[pyfunction]
fn integral_latex(
    start: &Bound<'_, PyAny>,
    end: &Bound<'_, PyAny>,
    term: &Bound<'_, PyAny>,
) -> PyResult<String> {
    Ok(math_latex::integral(
        expression(start)?,
        expression(end)?,
        expression(term)?,
    ))
}

#[pyfunction]
#[pyo3(signature = (*terms))]
fn add_latex(terms: &Bound<'_, PyTuple>) -> PyResult<String> {
    Ok(math_latex::add(iter_expressions(terms.as_any())?))
}

#[pyfunction]
#[pyo3(signature = (*terms))]
fn sub_latex(terms: &Bound<'_, PyTuple>) -> PyResult<String> {
    Ok(math_latex::sub(iter_expressions(terms.as_any())?))
}

/// Format terms into multiplication form. `operator` is a name like `"times"` or `"cdot"`;
/// the empty string writes the terms next to each other.
#[pyfunction]
#[pyo3(signature = (*terms, operator=""))]
fn mul_latex(terms: &Bound<'_, PyTuple>, operator: &str) -> PyResult<String> {
    let Some(operator) = MulOperator::from_name(operator) else {
        return Err(PyValueError::new_err(format!(
            "Invalid operator value: '{}'.",
            operator
        )));
    };
    Ok(math_latex::mul(iter_expressions(terms.as_any())?, operator))
}

#[pyfunction]
#[pyo3(signature = (*terms))]
fn div_latex(terms: &Bound<'_, PyTuple>) -> PyResult<String> {
    Ok(math_latex::div(iter_expressions(terms.as_any())?))
}

#[pyfunction]
fn sqrt_latex(base: &Bound<'_, PyAny>) -> PyResult<String> {
    Ok(math_latex::sqrt(expression(base)?))
}

#[pyfunction]
fn nth_root_latex(base: &Bound<'_, PyAny>, n: &Bound<'_, PyAny>) -> PyResult<String> {
    Ok(math_latex::nth_root(expression(base)?, expression(n)?))
}

#[pyfunction]
fn log_latex(base: &Bound<'_, PyAny>, exp: &Bound<'_, PyAny>) -> PyResult<String> {
    Ok(math_latex::log(expression(base)?, expression(exp)?))
}

#[pyfunction]
fn lim_latex(base: &Bound<'_, PyAny>, exp: &Bound<'_, PyAny>) -> PyResult<String> {
    Ok(math_latex::lim(expression(base)?, expression(exp)?))
}

/// A Python module implemented in Rust.
#[pymodule]
fn _math_latex_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("ShapeError", m.py().get_type::<ShapeError>())?;
    m.add(
        "UnsupportedTypeError",
        m.py().get_type::<UnsupportedTypeError>(),
    )?;
    m.add_function(wrap_pyfunction!(exp, m)?)?;
    m.add_function(wrap_pyfunction!(subscript, m)?)?;
    m.add_function(wrap_pyfunction!(superscript, m)?)?;
    m.add_function(wrap_pyfunction!(subscript_superscript, m)?)?;
    m.add_function(wrap_pyfunction!(arr2row, m)?)?;
    m.add_function(wrap_pyfunction!(matrix, m)?)?;
    m.add_function(wrap_pyfunction!(example_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(fraction, m)?)?;
    m.add_function(wrap_pyfunction!(sum_latex, m)?)?;
    m.add_function(wrap_pyfunction!(product_latex, m)?)?;
    m.add_function(wrap_pyfunction!(integral_latex, m)?)?;
    m.add_function(wrap_pyfunction!(add_latex, m)?)?;
    m.add_function(wrap_pyfunction!(sub_latex, m)?)?;
    m.add_function(wrap_pyfunction!(mul_latex, m)?)?;
    m.add_function(wrap_pyfunction!(div_latex, m)?)?;
    m.add_function(wrap_pyfunction!(sqrt_latex, m)?)?;
    m.add_function(wrap_pyfunction!(nth_root_latex, m)?)?;
    m.add_function(wrap_pyfunction!(log_latex, m)?)?;
    m.add_function(wrap_pyfunction!(lim_latex, m)?)?;
    Ok(())
}

/// Convert a Python value to an expression.
///
/// `bool` is a subclass of `int` in Python, but is rejected here.
fn expression(obj: &Bound<'_, PyAny>) -> PyResult<Expr> {
    if obj.is_instance_of::<PyBool>() {
        return Err(format_error(FormatError::UnsupportedType("bool".into())));
    }
    if obj.is_instance_of::<PyInt>() {
        return match obj.extract::<i128>() {
            Ok(n) => Ok(Expression::Int(n)),
            Err(err) if err.is_instance_of::<PyOverflowError>(obj.py()) => Err(format_error(
                FormatError::UnsupportedType("int outside the i128 range".into()),
            )),
            Err(err) => Err(err),
        };
    }
    if obj.is_instance_of::<PyFloat>() {
        return Ok(Expression::Float(obj.extract::<f64>()?));
    }
    if obj.is_instance_of::<PyComplex>() {
        let re = obj.getattr("real")?.extract::<f64>()?;
        let im = obj.getattr("imag")?.extract::<f64>()?;
        return Ok(Expression::Complex(Complex64::new(re, im)));
    }
    if obj.is_instance_of::<PyString>() {
        return Ok(Expression::from(obj.extract::<String>()?));
    }
    let name = obj.get_type().name()?.to_string();
    Err(format_error(FormatError::UnsupportedType(name.into())))
}

fn iter_expressions(obj: &Bound<'_, PyAny>) -> PyResult<Vec<Expr>> {
    obj.try_iter()?.map(|item| expression(&item?)).collect()
}

fn rows(m: &Bound<'_, PyAny>) -> PyResult<Vec<Vec<Expr>>> {
    m.try_iter()?.map(|row| iter_expressions(&row?)).collect()
}

fn format_error(err: FormatError) -> PyErr {
    match err {
        FormatError::Shape { .. } => ShapeError::new_err(err.string()),
        FormatError::UnsupportedType(_) => UnsupportedTypeError::new_err(err.string()),
    }
}
