//! # Form Fields and Raw Values
//!
//! Every calculator page is a form of 1–8 fields. The shell collects the
//! raw text the user typed into a [`FormValues`] map, and the calculator
//! turns it into a typed `*Input` with the parsing helpers below.
//!
//! Parsing rules shared by all calculators:
//!
//! - Blank (or whitespace-only) required field → [`CalcError::MissingField`]
//! - Text that is not a finite number → [`CalcError::InvalidInput`]
//! - Thousands separators and a leading `$` are accepted in number fields
//!
//! ## Example
//!
//! ```rust
//! use calc_core::form::FormValues;
//!
//! let form = FormValues::new().with("x", "3").with("y", " 4 ");
//! assert_eq!(form.required_number("x").unwrap(), 3.0);
//! assert_eq!(form.required_number("y").unwrap(), 4.0);
//! assert!(form.required_number("z").is_err());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Date format accepted by date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Field Specifications
// ============================================================================

/// One option of a choice field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Machine value stored in [`FormValues`]
    pub value: &'static str,
    /// Label shown to the user
    pub label: &'static str,
}

impl Choice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Choice { value, label }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// What kind of text a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "choices")]
pub enum FieldKind {
    /// Any finite decimal number
    Number,
    /// A whole number
    Integer,
    /// A list of numbers separated by commas, spaces or semicolons
    NumberList,
    /// A calendar date in `YYYY-MM-DD` form
    Date,
    /// Free text (math expressions, variable lists)
    Text,
    /// One of a fixed set of options
    Choice(&'static [Choice]),
}

/// Static description of one form field.
///
/// Built with `const fn` so calculators can declare their form as a
/// `const FIELDS: &[FieldSpec]` table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Key in [`FormValues`] and in error messages
    pub key: &'static str,
    /// Human label
    pub label: &'static str,
    pub kind: FieldKind,
    /// Display unit (e.g. "in", "kg", "%")
    pub unit: Option<&'static str>,
    /// Example value shown in an empty input
    pub placeholder: &'static str,
    pub required: bool,
}

impl FieldSpec {
    const fn base(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        FieldSpec {
            key,
            label,
            kind,
            unit: None,
            placeholder: "",
            required: true,
        }
    }

    /// A required decimal number field
    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self::base(key, label, FieldKind::Number)
    }

    /// A required whole-number field
    pub const fn integer(key: &'static str, label: &'static str) -> Self {
        Self::base(key, label, FieldKind::Integer)
    }

    /// A required list-of-numbers field
    pub const fn number_list(key: &'static str, label: &'static str) -> Self {
        Self::base(key, label, FieldKind::NumberList)
    }

    /// A required date field
    pub const fn date(key: &'static str, label: &'static str) -> Self {
        Self::base(key, label, FieldKind::Date)
    }

    /// A required free-text field
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::base(key, label, FieldKind::Text)
    }

    /// A required choice field
    pub const fn choice(key: &'static str, label: &'static str, choices: &'static [Choice]) -> Self {
        Self::base(key, label, FieldKind::Choice(choices))
    }

    pub const fn unit(self, unit: &'static str) -> Self {
        FieldSpec {
            unit: Some(unit),
            ..self
        }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        FieldSpec { placeholder, ..self }
    }

    pub const fn optional(self) -> Self {
        FieldSpec {
            required: false,
            ..self
        }
    }

    /// Options of a choice field (empty for other kinds)
    pub fn choices(&self) -> &'static [Choice] {
        match self.kind {
            FieldKind::Choice(choices) => choices,
            _ => &[],
        }
    }

    /// Label with the unit appended, e.g. "Height (in)"
    pub fn display_label(&self) -> String {
        match self.unit {
            Some(unit) => format!("{} ({})", self.label, unit),
            None => self.label.to_string(),
        }
    }
}

// ============================================================================
// Raw Form Values
// ============================================================================

/// Raw, unparsed text for each field of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Parse `key=value` pairs (as typed on a command line)
    pub fn from_pairs<'a, I>(pairs: I) -> CalcResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut form = FormValues::new();
        for pair in pairs {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                CalcError::invalid_input("field", pair, "Expected key=value")
            })?;
            form.set(key.trim(), value);
        }
        Ok(form)
    }

    /// Trimmed value, `None` when absent or blank
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn is_blank(&self, key: &str) -> bool {
        self.get(key).is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn required_text(&self, key: &str) -> CalcResult<&str> {
        self.get(key).ok_or_else(|| CalcError::missing_field(key))
    }

    pub fn required_number(&self, key: &str) -> CalcResult<f64> {
        let raw = self.required_text(key)?;
        parse_number(key, raw)
    }

    pub fn optional_number(&self, key: &str) -> CalcResult<Option<f64>> {
        self.get(key).map(|raw| parse_number(key, raw)).transpose()
    }

    /// Number field that falls back to `default` when left blank
    pub fn number_or(&self, key: &str, default: f64) -> CalcResult<f64> {
        Ok(self.optional_number(key)?.unwrap_or(default))
    }

    pub fn required_integer(&self, key: &str) -> CalcResult<i64> {
        let raw = self.required_text(key)?;
        parse_integer(key, raw)
    }

    pub fn optional_integer(&self, key: &str) -> CalcResult<Option<i64>> {
        self.get(key).map(|raw| parse_integer(key, raw)).transpose()
    }

    /// Non-negative whole number, e.g. a count of dice
    pub fn required_count(&self, key: &str) -> CalcResult<u32> {
        let value = self.required_integer(key)?;
        u32::try_from(value)
            .map_err(|_| CalcError::invalid_input(key, value.to_string(), "Must be a non-negative whole number"))
    }

    pub fn required_date(&self, key: &str) -> CalcResult<NaiveDate> {
        let raw = self.required_text(key)?;
        parse_date(key, raw)
    }

    pub fn optional_date(&self, key: &str) -> CalcResult<Option<NaiveDate>> {
        self.get(key).map(|raw| parse_date(key, raw)).transpose()
    }

    pub fn required_number_list(&self, key: &str) -> CalcResult<Vec<f64>> {
        let raw = self.required_text(key)?;
        let values = raw
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| parse_number(key, part))
            .collect::<CalcResult<Vec<f64>>>()?;
        if values.is_empty() {
            return Err(CalcError::missing_field(key));
        }
        Ok(values)
    }

    /// Value of a choice field, matched against option values or labels
    /// (case-insensitive). Returns the canonical option value.
    pub fn required_choice(&self, key: &str, choices: &'static [Choice]) -> CalcResult<&'static str> {
        let raw = self.required_text(key)?;
        choices
            .iter()
            .find(|c| c.value.eq_ignore_ascii_case(raw) || c.label.eq_ignore_ascii_case(raw))
            .map(|c| c.value)
            .ok_or_else(|| {
                let options = choices.iter().map(|c| c.value).collect::<Vec<_>>().join(", ");
                CalcError::invalid_input(key, raw, format!("Expected one of: {}", options))
            })
    }

    /// Choice field that falls back to `default` when left blank
    pub fn choice_or(&self, key: &str, choices: &'static [Choice], default: &'static str) -> CalcResult<&'static str> {
        if self.is_blank(key) {
            Ok(default)
        } else {
            self.required_choice(key, choices)
        }
    }
}

// ============================================================================
// Scalar Parsers
// ============================================================================

/// Parse user-entered text into a finite f64.
pub fn parse_number(field: &str, raw: &str) -> CalcResult<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    let value: f64 = cleaned
        .parse()
        .map_err(|_| CalcError::invalid_input(field, raw, "Not a number"))?;
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, raw, "Must be a finite number"));
    }
    Ok(value)
}

/// Parse user-entered text into a whole number.
pub fn parse_integer(field: &str, raw: &str) -> CalcResult<i64> {
    let value = parse_number(field, raw)?;
    if value.fract() != 0.0 || value.abs() > 9.0e15 {
        return Err(CalcError::invalid_input(field, raw, "Must be a whole number"));
    }
    Ok(value as i64)
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(field: &str, raw: &str) -> CalcResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| CalcError::invalid_input(field, raw, "Expected a date as YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEX: &[Choice] = &[Choice::new("male", "Male"), Choice::new("female", "Female")];

    #[test]
    fn test_blank_is_missing() {
        let form = FormValues::new().with("x", "   ");
        assert_eq!(form.required_number("x"), Err(CalcError::missing_field("x")));
        assert_eq!(form.optional_number("x"), Ok(None));
    }

    #[test]
    fn test_non_numeric_is_invalid() {
        let form = FormValues::new().with("x", "abc");
        let err = form.required_number("x").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_infinity_rejected() {
        let form = FormValues::new().with("x", "inf");
        assert!(form.required_number("x").is_err());
        let form = FormValues::new().with("x", "NaN");
        assert!(form.required_number("x").is_err());
    }

    #[test]
    fn test_currency_and_separators() {
        let form = FormValues::new().with("amount", "$12,500.50");
        assert_eq!(form.required_number("amount").unwrap(), 12500.5);
    }

    #[test]
    fn test_integer_rejects_fraction() {
        let form = FormValues::new().with("n", "2.5");
        assert!(form.required_integer("n").is_err());
        let form = FormValues::new().with("n", "12");
        assert_eq!(form.required_integer("n").unwrap(), 12);
    }

    #[test]
    fn test_count_rejects_negative() {
        let form = FormValues::new().with("n", "-3");
        assert!(form.required_count("n").is_err());
    }

    #[test]
    fn test_number_list() {
        let form = FormValues::new().with("seq", "1, 2;3  4");
        assert_eq!(form.required_number_list("seq").unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
        let form = FormValues::new().with("seq", "1, x");
        assert!(form.required_number_list("seq").is_err());
    }

    #[test]
    fn test_choice_matches_value_or_label() {
        let form = FormValues::new().with("sex", "Female");
        assert_eq!(form.required_choice("sex", SEX).unwrap(), "female");
        let form = FormValues::new().with("sex", "MALE");
        assert_eq!(form.required_choice("sex", SEX).unwrap(), "male");
        let form = FormValues::new().with("sex", "other");
        assert!(form.required_choice("sex", SEX).is_err());
    }

    #[test]
    fn test_date() {
        let form = FormValues::new().with("d", "2024-02-29");
        assert_eq!(
            form.required_date("d").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        let form = FormValues::new().with("d", "2023-02-29");
        assert!(form.required_date("d").is_err());
    }

    #[test]
    fn test_from_pairs() {
        let form = FormValues::from_pairs(["x=3", "y = 4"]).unwrap();
        assert_eq!(form.required_number("y").unwrap(), 4.0);
        assert!(FormValues::from_pairs(["nope"]).is_err());
    }

    #[test]
    fn test_field_spec_builder() {
        const FIELD: FieldSpec = FieldSpec::number("height", "Height").unit("in").optional();
        assert_eq!(FIELD.display_label(), "Height (in)");
        assert!(!FIELD.required);
    }
}
