//! The structured validation error.

use crate::code::Code;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Constraint parameters of a failed check, keyed by parameter name.
pub type Args = BTreeMap<String, Value>;

/// Result of a single check: `Ok(())` when the constraint holds.
pub type CheckResult = Result<(), ValidationError>;

/// Trait for translating validation errors.
pub trait Translator {
    /// Translate a validation error message.
    ///
    /// # Arguments
    ///
    /// * `code` - The code of the failed constraint
    /// * `field` - The field name
    /// * `args` - The violated constraint parameters
    fn translate(&self, code: Code, field: &str, args: &Args) -> Option<String>;
}

/// A single failed constraint.
///
/// Built fresh by every failing check and never mutated afterwards. `value` is absent
/// when no single scalar is to blame (membership and duplicate checks).
///
/// The `Display` form is
/// `"<code>: <field> fails validation, <message>"` without a value and
/// `"<code>: (<field>, <value>) fails validation, <message>"` with one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    code: Code,
    field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    args: Args,
}

impl ValidationError {
    /// Create a validation error from its parts.
    pub fn new(
        code: Code,
        args: Args,
        message: impl Into<String>,
        field: impl Into<String>,
        value: Option<Value>,
    ) -> Self {
        Self {
            code,
            field: field.into(),
            value,
            message: message.into(),
            args,
        }
    }

    /// The code of the failed constraint.
    pub fn code(&self) -> Code {
        self.code
    }

    /// The caller-supplied field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The offending value, if there is a single one.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The violated constraint parameters.
    pub fn args(&self) -> &Args {
        &self.args
    }

    /// Look up one constraint parameter.
    pub fn arg(&self, key: &str) -> Option<&Value> {
        self.args.get(key)
    }

    /// Return a copy whose message comes from `translator`.
    ///
    /// The current message is kept when the translator has nothing for this code.
    pub fn localize<T: Translator + ?Sized>(&self, translator: &T) -> Self {
        let message = translator
            .translate(self.code, &self.field, &self.args)
            .unwrap_or_else(|| self.message.clone());

        Self {
            message,
            ..self.clone()
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            None => write!(
                f,
                "{}: {} fails validation, {}",
                self.code, self.field, self.message
            ),
            Some(value) => write!(
                f,
                "{}: ({}, {}) fails validation, {}",
                self.code, self.field, value, self.message
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Build an [`Args`] map from literal pairs.
pub(crate) fn args<const N: usize>(pairs: [(&str, Value); N]) -> Args {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
