//! String checks.
//!
//! Lengths count Unicode scalar values, not bytes: `"héllo"` has length 5. Character
//! class checks report the first offending character and its position.

use crate::code::Code;
use crate::error::{args, Args, CheckResult};
use crate::messages::reject;
use crate::value::Value;
use std::collections::HashSet;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Unicode general category `Nd`.
fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Unicode general categories `L*`.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn fail(code: Code, field: &str, value: &str, args: Args) -> CheckResult {
    Err(reject(code, field, Some(Value::from(value)), args))
}

/// Fails when `value` is empty.
pub fn string_not_empty(field: &str, value: &str) -> CheckResult {
    if value.is_empty() {
        return fail(Code::StringNotEmpty, field, value, Args::new());
    }
    Ok(())
}

/// Fails when `value` is empty or only whitespace.
pub fn string_not_empty_ignore_space(field: &str, value: &str) -> CheckResult {
    if value.trim().is_empty() {
        return fail(Code::StringNotEmptyIgnoreSpace, field, value, Args::new());
    }
    Ok(())
}

/// Fails when `value` does not have exactly `length` characters.
pub fn string_len(field: &str, value: &str, length: usize) -> CheckResult {
    let actual = value.chars().count();
    if actual != length {
        return fail(
            Code::StringLength,
            field,
            value,
            args([("length", length.into()), ("actual", actual.into())]),
        );
    }
    Ok(())
}

/// Fails when `value` has fewer than `min` characters.
pub fn string_len_min(field: &str, value: &str, min: usize) -> CheckResult {
    let actual = value.chars().count();
    if actual < min {
        return fail(
            Code::StringLengthMin,
            field,
            value,
            args([("min", min.into()), ("actual", actual.into())]),
        );
    }
    Ok(())
}

/// Fails when `value` has more than `max` characters.
pub fn string_len_max(field: &str, value: &str, max: usize) -> CheckResult {
    let actual = value.chars().count();
    if actual > max {
        return fail(
            Code::StringLengthMax,
            field,
            value,
            args([("max", max.into()), ("actual", actual.into())]),
        );
    }
    Ok(())
}

/// Fails when the character count of `value` lies outside `[min, max]`.
pub fn string_len_between(field: &str, value: &str, min: usize, max: usize) -> CheckResult {
    let actual = value.chars().count();
    if actual < min || actual > max {
        return fail(
            Code::StringLengthBetween,
            field,
            value,
            args([
                ("min", min.into()),
                ("max", max.into()),
                ("actual", actual.into()),
            ]),
        );
    }
    Ok(())
}

fn only(field: &str, value: &str, code: Code, allowed: impl Fn(char) -> bool) -> CheckResult {
    match value.chars().enumerate().find(|&(_, c)| !allowed(c)) {
        Some((index, c)) => fail(
            code,
            field,
            value,
            args([("char", c.into()), ("index", index.into())]),
        ),
        None => Ok(()),
    }
}

/// Fails on the first character outside the ASCII range.
pub fn string_only_ascii(field: &str, value: &str) -> CheckResult {
    only(field, value, Code::StringOnlyAscii, |c| c.is_ascii())
}

/// Fails on the first character that is neither a letter nor a decimal digit.
///
/// Letters are the Unicode `L*` categories and digits the `Nd` category, so
/// `"Ünïcödé123"` and `"١٢٣"` pass while `"½"` or `"Ⅻ"` do not.
pub fn string_only_alphanumeric(field: &str, value: &str) -> CheckResult {
    only(field, value, Code::StringOnlyAlphanumeric, |c| {
        is_letter(c) || is_decimal_digit(c)
    })
}

/// Fails on the first character that is not a decimal digit (Unicode `Nd`).
///
/// Digits of other scripts pass; fractions, superscripts and Roman numerals do not.
pub fn string_only_numeric(field: &str, value: &str) -> CheckResult {
    only(field, value, Code::StringOnlyNumeric, is_decimal_digit)
}

fn not_in<S: AsRef<str>>(field: &str, value: &str, values: &[S]) -> CheckResult {
    let allowed: Vec<Value> = values.iter().map(|v| Value::from(v.as_ref())).collect();
    Err(reject(
        Code::StringIn,
        field,
        None,
        args([("values", Value::List(allowed)), ("actual", value.into())]),
    ))
}

/// Fails when `value` equals none of `values`. Comparison is case-sensitive.
pub fn string_in<S: AsRef<str>>(field: &str, value: &str, values: &[S]) -> CheckResult {
    if values.iter().any(|v| v.as_ref() == value) {
        return Ok(());
    }
    not_in(field, value, values)
}

/// Fails when `value` equals none of `values`, ignoring case.
pub fn string_in_ignore_case<S: AsRef<str>>(field: &str, value: &str, values: &[S]) -> CheckResult {
    let needle = value.to_lowercase();
    if values.iter().any(|v| v.as_ref().to_lowercase() == needle) {
        return Ok(());
    }
    not_in(field, value, values)
}

fn no_duplicate<I>(field: &str, values: I, key: impl Fn(&str) -> String) -> CheckResult
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    for (index, value) in values.into_iter().enumerate() {
        let value = value.as_ref();
        if !seen.insert(key(value)) {
            return Err(reject(
                Code::StringNoDuplicate,
                field,
                None,
                args([("duplicate", value.into()), ("index", index.into())]),
            ));
        }
    }
    Ok(())
}

/// Fails on the first entry of `values` that repeats an earlier one.
///
/// The error has no value; its `duplicate` argument is the repeated entry and `index`
/// its position.
pub fn string_no_duplicate<I>(field: &str, values: I) -> CheckResult
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    no_duplicate(field, values, str::to_string)
}

/// Like [`string_no_duplicate`], but entries differing only in case count as
/// duplicates.
pub fn string_no_duplicate_ignore_case<I>(field: &str, values: I) -> CheckResult
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    no_duplicate(field, values, str::to_lowercase)
}
