//! Stable error codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Machine-readable identifier of a failed constraint.
///
/// The string form (`ERROR_<CATEGORY>_<REASON>`) is part of the public contract and
/// does not change between releases. A code depends only on which constraint failed
/// and how, never on the value being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Code {
    #[serde(rename = "ERROR_NUMBER_NOT_A_NUMBER")]
    NumberNotANumber,
    #[serde(rename = "ERROR_NUMBER_MIN")]
    NumberMin,
    #[serde(rename = "ERROR_NUMBER_MAX")]
    NumberMax,
    #[serde(rename = "ERROR_NUMBER_GREATER_THAN")]
    NumberGreaterThan,
    #[serde(rename = "ERROR_NUMBER_SMALLER_THAN")]
    NumberSmallerThan,
    #[serde(rename = "ERROR_NUMBER_BETWEEN")]
    NumberBetween,
    #[serde(rename = "ERROR_NUMBER_FORMAT")]
    NumberFormat,
    #[serde(rename = "ERROR_NUMBER_NO_DECIMAL")]
    NumberNoDecimal,
    #[serde(rename = "ERROR_STRING_NOT_EMPTY")]
    StringNotEmpty,
    #[serde(rename = "ERROR_STRING_NOT_EMPTY_IGNORE_SPACE")]
    StringNotEmptyIgnoreSpace,
    #[serde(rename = "ERROR_STRING_LENGTH")]
    StringLength,
    #[serde(rename = "ERROR_STRING_LENGTH_MIN")]
    StringLengthMin,
    #[serde(rename = "ERROR_STRING_LENGTH_MAX")]
    StringLengthMax,
    #[serde(rename = "ERROR_STRING_LENGTH_BETWEEN")]
    StringLengthBetween,
    #[serde(rename = "ERROR_STRING_ONLY_ASCII")]
    StringOnlyAscii,
    #[serde(rename = "ERROR_STRING_ONLY_ALPHANUMERIC")]
    StringOnlyAlphanumeric,
    #[serde(rename = "ERROR_STRING_ONLY_NUMERIC")]
    StringOnlyNumeric,
    #[serde(rename = "ERROR_STRING_IN")]
    StringIn,
    #[serde(rename = "ERROR_STRING_NO_DUPLICATE")]
    StringNoDuplicate,
}

impl Code {
    /// Every code, in declaration order.
    pub const ALL: [Code; 19] = [
        Code::NumberNotANumber,
        Code::NumberMin,
        Code::NumberMax,
        Code::NumberGreaterThan,
        Code::NumberSmallerThan,
        Code::NumberBetween,
        Code::NumberFormat,
        Code::NumberNoDecimal,
        Code::StringNotEmpty,
        Code::StringNotEmptyIgnoreSpace,
        Code::StringLength,
        Code::StringLengthMin,
        Code::StringLengthMax,
        Code::StringLengthBetween,
        Code::StringOnlyAscii,
        Code::StringOnlyAlphanumeric,
        Code::StringOnlyNumeric,
        Code::StringIn,
        Code::StringNoDuplicate,
    ];

    /// The stable string form, e.g. `"ERROR_NUMBER_MIN"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Code::NumberNotANumber => "ERROR_NUMBER_NOT_A_NUMBER",
            Code::NumberMin => "ERROR_NUMBER_MIN",
            Code::NumberMax => "ERROR_NUMBER_MAX",
            Code::NumberGreaterThan => "ERROR_NUMBER_GREATER_THAN",
            Code::NumberSmallerThan => "ERROR_NUMBER_SMALLER_THAN",
            Code::NumberBetween => "ERROR_NUMBER_BETWEEN",
            Code::NumberFormat => "ERROR_NUMBER_FORMAT",
            Code::NumberNoDecimal => "ERROR_NUMBER_NO_DECIMAL",
            Code::StringNotEmpty => "ERROR_STRING_NOT_EMPTY",
            Code::StringNotEmptyIgnoreSpace => "ERROR_STRING_NOT_EMPTY_IGNORE_SPACE",
            Code::StringLength => "ERROR_STRING_LENGTH",
            Code::StringLengthMin => "ERROR_STRING_LENGTH_MIN",
            Code::StringLengthMax => "ERROR_STRING_LENGTH_MAX",
            Code::StringLengthBetween => "ERROR_STRING_LENGTH_BETWEEN",
            Code::StringOnlyAscii => "ERROR_STRING_ONLY_ASCII",
            Code::StringOnlyAlphanumeric => "ERROR_STRING_ONLY_ALPHANUMERIC",
            Code::StringOnlyNumeric => "ERROR_STRING_ONLY_NUMERIC",
            Code::StringIn => "ERROR_STRING_IN",
            Code::StringNoDuplicate => "ERROR_STRING_NO_DUPLICATE",
        }
    }

    /// Whether the code belongs to the numeric checks.
    pub fn is_number(self) -> bool {
        self.as_str().starts_with("ERROR_NUMBER_")
    }

    /// Whether the code belongs to the string checks.
    pub fn is_string(self) -> bool {
        self.as_str().starts_with("ERROR_STRING_")
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that is not a known code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation code: {0}")]
pub struct UnknownCode(pub String);

impl FromStr for Code {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Code::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}
