//! # fieldcheck
//!
//! Single-constraint validation for numbers and strings. Each check validates one
//! value against one constraint and returns `Ok(())` or a [`ValidationError`]
//! carrying a stable [`Code`], the field name, the offending value, a rendered
//! message and the violated constraint parameters.
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! assert!(number_between("age", 42u8, 18, 120).is_ok());
//!
//! let err = string_len_between("name", "", 1, 3).unwrap_err();
//! assert_eq!(err.code(), Code::StringLengthBetween);
//! assert_eq!(err.arg("min").and_then(Value::as_u64), Some(1));
//! assert_eq!(
//!     err.to_string(),
//!     "ERROR_STRING_LENGTH_BETWEEN: (name, ) fails validation, \
//!      name must be between 1 and 3 characters long"
//! );
//! ```
//!
//! ## Error Format
//!
//! Errors serialize to JSON as:
//!
//! ```json
//! {
//!   "code": "ERROR_NUMBER_MIN",
//!   "field": "age",
//!   "value": 17,
//!   "message": "age must be at least 18",
//!   "args": { "min": 18 }
//! }
//! ```
//!
//! `value` is omitted for membership and duplicate checks, `args` when empty.
//!
//! ## Contract violations
//!
//! A bound of another type than the value does not compile. A malformed
//! [`number_format`] specification panics. Neither is ever reported as a
//! [`ValidationError`].

#[macro_use]
mod tracing_macros;

mod code;
mod error;
mod format;
mod messages;
mod number;
mod string;
mod value;


pub use code::{Code, UnknownCode};
pub use error::{Args, CheckResult, Translator, ValidationError};
pub use format::{decimal_places, DecimalFormat, FormatSpecError};
pub use messages::{interpolate, CatalogError, MessageCatalog};
pub use number::{
    number_between, number_format, number_format_with, number_greater_than, number_max,
    number_min, number_not_a_number, number_smaller_than, Float, Number,
};
pub use string::{
    string_in, string_in_ignore_case, string_len, string_len_between, string_len_max,
    string_len_min, string_no_duplicate, string_no_duplicate_ignore_case, string_not_empty,
    string_not_empty_ignore_space, string_only_alphanumeric, string_only_ascii,
    string_only_numeric,
};
pub use value::Value;

/// Prelude module for validation
pub mod prelude {
    pub use crate::code::Code;
    pub use crate::error::{Args, CheckResult, Translator, ValidationError};
    pub use crate::format::DecimalFormat;
    pub use crate::messages::MessageCatalog;
    pub use crate::number::*;
    pub use crate::string::*;
    pub use crate::value::Value;
}
