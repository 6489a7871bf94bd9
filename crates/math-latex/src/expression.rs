use std::borrow::Cow;

use num_complex::Complex64;

/// A value that can appear inside a LaTeX construct.
///
/// An expression is either a literal number or a piece of text. Text is taken to be an
/// already-formatted LaTeX fragment and is never escaped, which is what allows the output of one
/// formatting function to be fed into another.
///
/// ```rust
/// use math_latex::{Expression, fraction, sqrt};
///
/// let inner = sqrt(2);
/// assert_eq!(fraction(1, inner), r"\frac{1}{\sqrt{2}}");
/// assert_eq!(Expression::from(2.5).normalize(), "2.5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
    Int(i128),
    Float(f64),
    Complex(Complex64),
    Text(Cow<'a, str>),
}

impl<'a> Expression<'a> {
    /// Converts the expression into its canonical text.
    ///
    /// - Integers are written as base-10 digits.
    /// - Finite floats always carry a fractional part, so `1.0` stays `"1.0"` and `1e21` becomes
    ///   `"1.0e21"`.
    /// - Complex numbers are written as `<re>+<im>i`, with each part in its shortest form. The
    ///   parts are concatenated as they are, so a negative imaginary part gives `1+-1i`.
    /// - Text is returned unchanged, without copying.
    pub fn normalize(self) -> Cow<'a, str> {
        match self {
            Expression::Int(n) => Cow::Owned(itoa::Buffer::new().format(n).to_owned()),
            Expression::Float(x) => Cow::Owned(float_text(x)),
            Expression::Complex(c) => {
                let (mut re, mut im) = (dtoa::Buffer::new(), dtoa::Buffer::new());
                let (re, im) = (complex_part(&mut re, c.re), complex_part(&mut im, c.im));
                Cow::Owned(format!("{re}+{im}i"))
            }
            Expression::Text(text) => text,
        }
    }

    /// Returns a copy of this expression that borrows its text from `self`.
    pub fn as_borrowed(&self) -> Expression<'_> {
        match self {
            Expression::Int(n) => Expression::Int(*n),
            Expression::Float(x) => Expression::Float(*x),
            Expression::Complex(c) => Expression::Complex(*c),
            Expression::Text(text) => Expression::Text(Cow::Borrowed(text)),
        }
    }
}

/// Shortest round-trip text of `x`, with `.0` added to a bare exponent mantissa.
fn float_text(x: f64) -> String {
    let mut buf = dtoa::Buffer::new();
    let text = buf.format(x);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            mantissa.to_string() + ".0e" + exponent
        }
        _ => text.to_string(),
    }
}

/// A complex part drops the `.0` of whole numbers: `1+1i`, not `1.0+1.0i`.
fn complex_part(buf: &mut dtoa::Buffer, x: f64) -> &str {
    let text = buf.format(x);
    text.strip_suffix(".0").unwrap_or(text)
}

/// Converts a single value into its canonical text. See [`Expression::normalize`].
#[inline]
pub fn normalize<'a>(value: impl Into<Expression<'a>>) -> Cow<'a, str> {
    value.into().normalize()
}

/// Normalizes every value of `values`, preserving order and count.
pub fn normalize_all<'a, I>(values: I) -> Vec<Cow<'a, str>>
where
    I: IntoIterator,
    I::Item: Into<Expression<'a>>,
{
    values.into_iter().map(normalize).collect()
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Expression<'_> {
                #[inline]
                fn from(n: $t) -> Self {
                    Expression::Int(i128::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<usize> for Expression<'_> {
    #[inline]
    fn from(n: usize) -> Self {
        Expression::Int(n as i128)
    }
}

impl From<isize> for Expression<'_> {
    #[inline]
    fn from(n: isize) -> Self {
        Expression::Int(n as i128)
    }
}

impl From<f64> for Expression<'_> {
    #[inline]
    fn from(x: f64) -> Self {
        Expression::Float(x)
    }
}

impl From<f32> for Expression<'_> {
    #[inline]
    fn from(x: f32) -> Self {
        Expression::Float(f64::from(x))
    }
}

impl From<Complex64> for Expression<'_> {
    #[inline]
    fn from(c: Complex64) -> Self {
        Expression::Complex(c)
    }
}

impl<'a> From<&'a str> for Expression<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        Expression::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Expression<'a> {
    #[inline]
    fn from(text: &'a String) -> Self {
        Expression::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Expression<'_> {
    #[inline]
    fn from(text: String) -> Self {
        Expression::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Expression<'a> {
    #[inline]
    fn from(text: Cow<'a, str>) -> Self {
        Expression::Text(text)
    }
}

impl<'a> From<&'a Expression<'_>> for Expression<'a> {
    #[inline]
    fn from(expr: &'a Expression<'_>) -> Self {
        expr.as_borrowed()
    }
}

#[cfg(feature = "serde")]
mod de {
    use std::borrow::Cow;
    use std::fmt;

    use num_complex::Complex64;
    use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

    use super::Expression;
    use crate::FormatError;

    fn unsupported<E: de::Error>(name: &str) -> E {
        E::custom(FormatError::UnsupportedType(name.into()))
    }

    /// Accepts integers, floats, strings and `{ re, im }` tables.
    struct ExpressionVisitor;

    impl<'de> Visitor<'de> for ExpressionVisitor {
        type Value = Expression<'static>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer, a float, a string or a complex number table")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Expression::Int(i128::from(v)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Expression::Int(i128::from(v)))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
            Ok(Expression::Int(v))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
            i128::try_from(v)
                .map(Expression::Int)
                .map_err(|_| unsupported("integer outside the i128 range"))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Expression::Float(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Expression::Text(Cow::Owned(v.to_owned())))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Expression::Text(Cow::Owned(v)))
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
            Err(unsupported("boolean"))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Err(unsupported("unit"))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Err(unsupported("none"))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, _: A) -> Result<Self::Value, A::Error> {
            Err(unsupported("array"))
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut re = None;
            let mut im = None;
            while let Some(key) = map.next_key::<Cow<'de, str>>()? {
                match key.as_ref() {
                    "re" => re = Some(map.next_value::<Part>()?.0),
                    "im" => im = Some(map.next_value::<Part>()?.0),
                    _ => return Err(unsupported("table")),
                }
            }
            match (re, im) {
                (Some(re), Some(im)) => Ok(Expression::Complex(Complex64::new(re, im))),
                (None, _) => Err(de::Error::missing_field("re")),
                (_, None) => Err(de::Error::missing_field("im")),
            }
        }
    }

    impl<'de, 'a> Deserialize<'de> for Expression<'a> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ExpressionVisitor)
        }
    }

    /// One component of a complex number; integers are widened to floats.
    struct Part(f64);

    struct PartVisitor;

    impl Visitor<'_> for PartVisitor {
        type Value = Part;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Part, E> {
            Ok(Part(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Part, E> {
            Ok(Part(v as f64))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Part, E> {
            Ok(Part(v))
        }
    }

    impl<'de> Deserialize<'de> for Part {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(PartVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int() {
        assert_eq!(normalize(1), "1");
        assert_eq!(normalize(-42i64), "-42");
        assert_eq!(normalize(u64::MAX), "18446744073709551615");
    }

    #[test]
    fn test_float() {
        assert_eq!(normalize(1.0), "1.0");
        assert_eq!(normalize(2.5), "2.5");
        assert_eq!(normalize(-0.25), "-0.25");
    }

    #[test]
    fn test_complex() {
        assert_eq!(normalize(Complex64::new(1.0, 1.0)), "1+1i");
        assert_eq!(normalize(Complex64::new(0.5, 2.0)), "0.5+2i");
        assert_eq!(normalize(Complex64::new(0.0, 3.0)), "0+3i");
    }

    #[test]
    fn test_float_exponent_keeps_fraction() {
        assert_eq!(normalize(1e21), "1.0e21");
        assert_eq!(normalize(1.5e-7), "1.5e-7");
        assert_eq!(normalize(1e-7), "1.0e-7");
        assert_eq!(normalize(f64::MAX), "1.7976931348623157e308");
        assert_eq!(normalize(1e20), "100000000000000000000.0");
    }

    #[test]
    fn test_complex_parts_match_float_text() {
        assert_eq!(
            normalize(Complex64::new(1e20, 1.5e-7)),
            "100000000000000000000+1.5e-7i"
        );
        assert_eq!(normalize(Complex64::new(-0.5, 1e21)), "-0.5+1e21i");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_u128_outside_i128_range() {
        use serde::Deserialize;
        use serde::de::IntoDeserializer;
        use serde::de::value::{Error, U128Deserializer};

        let de: U128Deserializer<Error> = (i128::MAX as u128).into_deserializer();
        assert_eq!(Expression::deserialize(de).unwrap(), Expression::Int(i128::MAX));
        let de: U128Deserializer<Error> = u128::MAX.into_deserializer();
        assert_eq!(
            Expression::deserialize(de).unwrap_err().to_string(),
            "Unsupported expression type: integer outside the i128 range."
        );
    }

    #[test]
    fn test_complex_negative_imaginary_is_concatenated() {
        assert_eq!(normalize(Complex64::new(1.0, -1.0)), "1+-1i");
    }

    #[test]
    fn test_str() {
        assert_eq!(normalize("1"), "1");
        assert!(matches!(normalize(r"\alpha"), Cow::Borrowed(r"\alpha")));
        assert_eq!(normalize(String::from("x+y")), "x+y");
    }

    #[test]
    fn test_normalize_all() {
        let values = [
            Expression::from(1),
            Expression::from(1.0),
            Expression::from("x"),
            Expression::from(Complex64::new(2.0, 3.0)),
        ];
        assert_eq!(normalize_all(&values), ["1", "1.0", "x", "2+3i"]);
        assert!(normalize_all(Vec::<Expression>::new()).is_empty());
    }

    #[test]
    fn test_as_borrowed() {
        let owned = Expression::from(String::from("a_{1}"));
        assert!(matches!(
            owned.as_borrowed(),
            Expression::Text(Cow::Borrowed("a_{1}"))
        ));
        assert_eq!(Expression::Int(3).as_borrowed(), Expression::Int(3));
    }
}
