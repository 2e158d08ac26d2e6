//! Message templates.
//!
//! Every check renders its message from the built-in English catalog. Callers that
//! need other wording or another language load their own [`MessageCatalog`] and pass
//! it to [`ValidationError::localize`].

use crate::code::Code;
use crate::error::{Args, Translator, ValidationError};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

static ENGLISH: OnceLock<MessageCatalog> = OnceLock::new();

/// Error raised while loading a message catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A mapping from [`Code`] to message template.
///
/// Templates use `{field}` for the field name and `{<arg>}` for any constraint
/// parameter. Placeholders with no matching parameter are left as they are.
///
/// Catalogs serialize as a JSON object keyed by code:
///
/// ```json
/// { "ERROR_NUMBER_MIN": "{field} doit valoir au moins {min}" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    templates: HashMap<Code, String>,
}

impl MessageCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English catalog, with a template for every code.
    pub fn english() -> Self {
        let templates = Code::ALL
            .into_iter()
            .map(|code| (code, default_template(code).to_string()))
            .collect();
        Self { templates }
    }

    /// Load a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        trace_debug!(templates = catalog.len(), "loaded message catalog");
        Ok(catalog)
    }

    /// Set the template for one code.
    pub fn set(&mut self, code: Code, template: impl Into<String>) -> &mut Self {
        self.templates.insert(code, template.into());
        self
    }

    /// Builder form of [`MessageCatalog::set`].
    pub fn with(mut self, code: Code, template: impl Into<String>) -> Self {
        self.set(code, template);
        self
    }

    /// The template for `code`, if the catalog has one.
    pub fn template(&self, code: Code) -> Option<&str> {
        self.templates.get(&code).map(String::as_str)
    }

    /// Overlay this catalog on `base`: templates here win, the rest come from `base`.
    pub fn merged_over(&self, base: &MessageCatalog) -> Self {
        let mut templates = base.templates.clone();
        templates.extend(
            self.templates
                .iter()
                .map(|(code, template)| (*code, template.clone())),
        );
        Self { templates }
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render the template for `code`.
    pub fn render(&self, code: Code, field: &str, args: &Args) -> Option<String> {
        self.template(code)
            .map(|template| interpolate(template, field, args))
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, code: Code, field: &str, args: &Args) -> Option<String> {
        self.render(code, field, args)
    }
}

/// Replace `{field}` and `{<arg>}` placeholders in `template`.
///
/// The template is scanned once, left to right. Substituted text is never scanned
/// again, so a field name or value that looks like a placeholder is kept verbatim.
pub fn interpolate(template: &str, field: &str, args: &Args) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let name = match after.find(['{', '}']) {
            Some(close) if after[close..].starts_with('}') => &after[..close],
            _ => {
                // Not a placeholder: keep the brace and scan on from the next char.
                result.push('{');
                rest = after;
                continue;
            }
        };

        match (name, args.get(name)) {
            ("field", _) => result.push_str(field),
            (_, Some(value)) => result.push_str(&value.to_string()),
            (_, None) => {
                result.push('{');
                result.push_str(name);
                result.push('}');
            }
        }
        rest = &after[name.len() + 1..];
    }

    result.push_str(rest);
    result
}

fn default_template(code: Code) -> &'static str {
    match code {
        Code::NumberNotANumber => "{field} must be a number",
        Code::NumberMin => "{field} must be at least {min}",
        Code::NumberMax => "{field} must be at most {max}",
        Code::NumberGreaterThan => "{field} must be greater than {n}",
        Code::NumberSmallerThan => "{field} must be smaller than {n}",
        Code::NumberBetween => "{field} must be between {min} and {max}",
        Code::NumberFormat => {
            "{field} must have between {min_decimals} and {max_decimals} decimal places"
        }
        Code::NumberNoDecimal => "{field} must not have decimal places",
        Code::StringNotEmpty => "{field} must not be empty",
        Code::StringNotEmptyIgnoreSpace => "{field} must not be blank",
        Code::StringLength => "{field} must be exactly {length} characters long",
        Code::StringLengthMin => "{field} must be at least {min} characters long",
        Code::StringLengthMax => "{field} must be at most {max} characters long",
        Code::StringLengthBetween => "{field} must be between {min} and {max} characters long",
        Code::StringOnlyAscii => "{field} must contain only ASCII characters, found '{char}'",
        Code::StringOnlyAlphanumeric => "{field} must contain only letters and digits, found '{char}'",
        Code::StringOnlyNumeric => "{field} must contain only digits, found '{char}'",
        Code::StringIn => "{field} must be one of {values}",
        Code::StringNoDuplicate => "{field} must not contain duplicates, found '{duplicate}'",
    }
}

/// Build the error for a failed check, with its message rendered from the English
/// catalog.
pub(crate) fn reject(code: Code, field: &str, value: Option<Value>, args: Args) -> ValidationError {
    let catalog = ENGLISH.get_or_init(MessageCatalog::english);
    let message = catalog
        .render(code, field, &args)
        .unwrap_or_else(|| format!("{field} fails {code}"));

    trace_debug!(code = %code, field, "validation failed");

    ValidationError::new(code, args, message, field, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::args;

    #[test]
    fn english_covers_every_code() {
        let catalog = MessageCatalog::english();
        assert_eq!(catalog.len(), Code::ALL.len());
        for code in Code::ALL {
            let template = catalog.template(code).unwrap();
            assert!(template.contains("{field}"), "{code} template lacks field");
        }
    }

    #[test]
    fn interpolate_field_and_args() {
        let rendered = interpolate(
            "{field} must be between {min} and {max}",
            "age",
            &args([("min", Value::Uint(18)), ("max", Value::Uint(120))]),
        );
        assert_eq!(rendered, "age must be between 18 and 120");
    }

    #[test]
    fn interpolate_leaves_unknown_placeholders() {
        let rendered = interpolate("{field} {unknown}", "x", &Args::new());
        assert_eq!(rendered, "x {unknown}");
    }

    #[test]
    fn interpolate_does_not_expand_substituted_text() {
        let rendered = interpolate(
            "{field} must not contain duplicates, found '{duplicate}'",
            "{index}",
            &args([("duplicate", Value::from("{index}")), ("index", Value::Uint(1))]),
        );
        assert_eq!(rendered, "{index} must not contain duplicates, found '{index}'");

        let rendered = interpolate(
            "{field} must be at least {min}",
            "{min}",
            &args([("min", Value::Uint(2))]),
        );
        assert_eq!(rendered, "{min} must be at least 2");
    }

    #[test]
    fn interpolate_keeps_stray_braces() {
        let args = args([("min", Value::Uint(3))]);
        assert_eq!(interpolate("{{min}}", "x", &args), "{3}");
        assert_eq!(interpolate("open { only", "x", &args), "open { only");
        assert_eq!(interpolate("{field}}", "x", &args), "x}");
    }

    #[test]
    fn placeholder_shaped_duplicate_is_reported_verbatim() {
        let err = crate::string::string_no_duplicate("tags", ["{index}", "{index}"]).unwrap_err();
        assert_eq!(err.message(), "tags must not contain duplicates, found '{index}'");
    }

    #[test]
    fn catalog_from_json() {
        let catalog = MessageCatalog::from_json(
            r#"{ "ERROR_NUMBER_MIN": "{field} doit valoir au moins {min}" }"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.render(Code::NumberMin, "age", &args([("min", Value::Uint(18))])),
            Some("age doit valoir au moins 18".to_string())
        );
        assert!(catalog.template(Code::NumberMax).is_none());
    }

    #[test]
    fn catalog_from_json_rejects_unknown_code() {
        let result = MessageCatalog::from_json(r#"{ "ERROR_NOPE": "x" }"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn catalog_from_json_rejects_malformed_input() {
        assert!(MessageCatalog::from_json("not json").is_err());
    }

    #[test]
    fn merged_over_prefers_overlay() {
        let overlay = MessageCatalog::new().with(Code::NumberMin, "{field} too small");
        let merged = overlay.merged_over(&MessageCatalog::english());

        assert_eq!(merged.len(), Code::ALL.len());
        assert_eq!(merged.template(Code::NumberMin), Some("{field} too small"));
        assert_eq!(
            merged.template(Code::NumberMax),
            Some("{field} must be at most {max}")
        );
    }

    #[test]
    fn reject_renders_message() {
        let error = reject(
            Code::NumberMin,
            "age",
            Some(Value::Uint(17)),
            args([("min", Value::Uint(18))]),
        );
        assert_eq!(error.message(), "age must be at least 18");
        assert_eq!(error.code(), Code::NumberMin);
    }

    #[test]
    fn catalog_localizes_errors() {
        let catalog = MessageCatalog::new().with(Code::NumberMin, "{field}: minimum {min}");
        let error = reject(
            Code::NumberMin,
            "age",
            Some(Value::Uint(17)),
            args([("min", Value::Uint(18))]),
        );

        assert_eq!(error.localize(&catalog).message(), "age: minimum 18");
    }
}
