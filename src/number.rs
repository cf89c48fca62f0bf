/// The numeric types a line of input can be validated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// A 32-bit signed integer.
    Int32,
    /// A 64-bit signed integer.
    Int64,
    /// A single-precision floating-point number.
    Float32,
    /// A double-precision floating-point number.
    Float64,
}

impl NumberKind {
    /// Describes the kind to the operator, as in "please enter *an integer*".
    pub const fn description(self) -> &'static str {
        match self {
            Self::Int32 => "an integer",
            Self::Int64 => "a long integer",
            Self::Float32 => "a float",
            Self::Float64 => "a double",
        }
    }

    /// Parses `text` as a number of this kind.
    ///
    /// See [`parse_number`] for the accepted grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use quark::{NumberKind, ParsedNumber};
    ///
    /// assert_eq!(NumberKind::Int64.parse("-17"), Some(ParsedNumber::Int64(-17)));
    /// assert_eq!(NumberKind::Int32.parse("3.14"), None);
    /// ```
    pub fn parse(self, text: &str) -> Option<ParsedNumber> {
        match self {
            Self::Int32 => parse_number(text).map(ParsedNumber::Int32),
            Self::Int64 => parse_number(text).map(ParsedNumber::Int64),
            Self::Float32 => parse_number(text).map(ParsedNumber::Float32),
            Self::Float64 => parse_number(text).map(ParsedNumber::Float64),
        }
    }
}

/// A value produced by [`NumberKind::parse`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    /// See [`NumberKind::Int32`].
    Int32(i32),
    /// See [`NumberKind::Int64`].
    Int64(i64),
    /// See [`NumberKind::Float32`].
    Float32(f32),
    /// See [`NumberKind::Float64`].
    Float64(f64),
}

/// A type that a line of input may be strictly validated as.
pub trait Number: Sized + Copy {
    /// The kind of number this type represents.
    const KIND: NumberKind;

    /// Parses `text`, returning `None` unless the whole text is a literal in range.
    fn parse_strict(text: &str) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl Number for $t {
                const KIND: NumberKind = NumberKind::$kind;

                #[inline]
                fn parse_strict(text: &str) -> Option<Self> {
                    // `FromStr` already rejects whitespace, empty input and overflow.
                    text.parse().ok()
                }
            }
        )*
    };
}

impl_integer!(i32 => Int32, i64 => Int64);

/// Whether `text` spells out an infinity rather than a value too large to be represented.
fn names_infinity(text: &str) -> bool {
    let unsigned = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Whether the mantissa of `text` contains a non-zero digit.
fn has_nonzero_mantissa(text: &str) -> bool {
    text.chars()
        .take_while(|&c| c != 'e' && c != 'E')
        .any(|c| matches!(c, '1'..='9'))
}

macro_rules! impl_float {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl Number for $t {
                const KIND: NumberKind = NumberKind::$kind;

                fn parse_strict(text: &str) -> Option<Self> {
                    let value: $t = text.parse().ok()?;

                    if value.is_infinite() && !names_infinity(text) {
                        return None; // overflow
                    }
                    if value == 0.0 && has_nonzero_mantissa(text) {
                        return None; // underflow
                    }

                    Some(value)
                }
            }
        )*
    };
}

impl_float!(f32 => Float32, f64 => Float64);

/// Parses `text` as a number of type `T`.
///
/// Integers are an optional `+` or `-` sign followed by decimal digits. Floating-point numbers
/// additionally accept a decimal point, an exponent, and the `inf` and `nan` keywords.
///
/// The whole text must form the literal: leading or trailing whitespace, stray characters and
/// empty text are all rejected. Values that do not fit in `T` are rejected too, rather than being
/// clamped or wrapped.
///
/// # Examples
///
/// ```
/// assert_eq!(quark::parse_number::<i32>("+42"), Some(42));
/// assert_eq!(quark::parse_number::<i32>("12abc"), None);
/// assert_eq!(quark::parse_number::<f64>("1.5e3"), Some(1500.0));
/// ```
#[inline]
pub fn parse_number<T: Number>(text: &str) -> Option<T> {
    T::parse_strict(text)
}
