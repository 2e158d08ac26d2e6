//! Numeric checks.
//!
//! Every check is one generic function over [`Number`]. The bound always has the same
//! type as the value, so comparing an `i32` against an `i64` bound is rejected by the
//! compiler instead of being coerced:
//!
//! ```compile_fail
//! use fieldcheck::number_min;
//!
//! let _ = number_min("age", 18_i32, 18_i64);
//! ```
//!
//! NaN compares false against any bound, so the ordering checks accept it. Reject NaN
//! explicitly with [`number_not_a_number`].

use crate::code::Code;
use crate::error::{args, Args, CheckResult};
use crate::format::{decimal_places, DecimalFormat};
use crate::messages::reject;
use crate::value::Value;
use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}
}

/// A native numeric type the checks accept.
///
/// Implemented for every fixed-width integer type up to 64 bits, `isize`, `usize`,
/// `f32` and `f64`. The trait is sealed.
pub trait Number: Copy + PartialOrd + Display + Debug + Send + Sync + sealed::Sealed {
    /// Convert into the error payload.
    fn to_value(self) -> Value;
}

/// A floating-point [`Number`].
pub trait Float: Number {
    /// Whether the value is IEEE-754 NaN.
    fn is_nan(self) -> bool;
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Number for $t {
                fn to_value(self) -> Value {
                    Value::integer(self as i64)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Number for $t {
                fn to_value(self) -> Value {
                    Value::Uint(self as u64)
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl sealed::Sealed for f32 {}

impl Number for f32 {
    fn to_value(self) -> Value {
        // Widening 0.1f32 gives 0.10000000149011612; going through the shortest f32
        // rendering keeps the payload at 0.1.
        Value::Float(self.to_string().parse().unwrap_or(f64::from(self)))
    }
}

impl Float for f32 {
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl sealed::Sealed for f64 {}

impl Number for f64 {
    fn to_value(self) -> Value {
        Value::Float(self)
    }
}

impl Float for f64 {
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

fn fail<T: Number>(code: Code, field: &str, value: T, args: Args) -> CheckResult {
    Err(reject(code, field, Some(value.to_value()), args))
}

/// Fails when `value` is NaN.
pub fn number_not_a_number<T: Float>(field: &str, value: T) -> CheckResult {
    if value.is_nan() {
        return fail(Code::NumberNotANumber, field, value, Args::new());
    }
    Ok(())
}

/// Fails when `value < min`.
pub fn number_min<T: Number>(field: &str, value: T, min: T) -> CheckResult {
    if value < min {
        return fail(Code::NumberMin, field, value, args([("min", min.to_value())]));
    }
    Ok(())
}

/// Fails when `value > max`.
pub fn number_max<T: Number>(field: &str, value: T, max: T) -> CheckResult {
    if value > max {
        return fail(Code::NumberMax, field, value, args([("max", max.to_value())]));
    }
    Ok(())
}

/// Fails when `value <= n`.
pub fn number_greater_than<T: Number>(field: &str, value: T, n: T) -> CheckResult {
    if value <= n {
        return fail(Code::NumberGreaterThan, field, value, args([("n", n.to_value())]));
    }
    Ok(())
}

/// Fails when `value >= n`.
pub fn number_smaller_than<T: Number>(field: &str, value: T, n: T) -> CheckResult {
    if value >= n {
        return fail(Code::NumberSmallerThan, field, value, args([("n", n.to_value())]));
    }
    Ok(())
}

/// Fails when `value` lies outside `[min, max]`.
pub fn number_between<T: Number>(field: &str, value: T, min: T, max: T) -> CheckResult {
    if value < min || value > max {
        return fail(
            Code::NumberBetween,
            field,
            value,
            args([("min", min.to_value()), ("max", max.to_value())]),
        );
    }
    Ok(())
}

/// Checks the number of decimal places of `value` against an `"m,n"` specification.
///
/// The value is rendered with its shortest round-trip decimal form, so `1.50` has one
/// decimal place and `0.1 + 0.2` has seventeen.
///
/// # Panics
///
/// Panics when `format` is malformed: wrong arity, or a negative or non-numeric
/// bound. A minimum above the maximum is well formed, and every value fails it with
/// [`Code::NumberFormat`]. Use [`DecimalFormat::parse`] and
/// [`number_format_with`] when the specification is not a literal.
pub fn number_format<T: Number>(field: &str, value: T, format: &str) -> CheckResult {
    let format = DecimalFormat::parse(format).unwrap_or_else(|e| panic!("{e}"));
    number_format_with(field, value, format)
}

/// Checks the number of decimal places of `value` against a parsed [`DecimalFormat`].
///
/// A value with decimals checked against `0,0` fails with
/// [`Code::NumberNoDecimal`]; every other mismatch fails with [`Code::NumberFormat`].
pub fn number_format_with<T: Number>(field: &str, value: T, format: DecimalFormat) -> CheckResult {
    let decimals = decimal_places(&value.to_string());
    if format.allows(decimals) {
        return Ok(());
    }

    if format.is_integer() {
        return fail(
            Code::NumberNoDecimal,
            field,
            value,
            args([("decimals", decimals.into())]),
        );
    }

    fail(
        Code::NumberFormat,
        field,
        value,
        args([
            ("min_decimals", format.min.into()),
            ("max_decimals", format.max.into()),
            ("decimals", decimals.into()),
        ]),
    )
}
