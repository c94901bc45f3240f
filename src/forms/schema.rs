//! Statically declared form field sets.
//!
//! Each form lists its fields as a `&'static [FieldSpec]`. A [`FormSchema`]
//! checks that declaration once when it is built and then validates raw
//! submissions against it, producing either normalized [`CleanedData`] or a
//! [`FieldErrors`] list in declaration order.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use validator::{ValidateEmail, ValidateLength};

use crate::domain::types::normalize_phone_to_e164;

/// Raw submitted values keyed by field name.
pub type FormInput = HashMap<String, String>;

/// Expected date format for [`FieldKind::Date`] fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest `max_digits` a decimal field may declare; keeps values within `i64`.
const MAX_DECIMAL_DIGITS: u8 = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Lower-cased, validated email address.
    Email,
    /// Phone number normalized to E.164.
    Phone,
    /// Calendar date in [`DATE_FORMAT`].
    Date,
    /// Fixed-point number stored as an integer count of `10^-decimal_places`.
    Decimal { max_digits: u8, decimal_places: u8 },
    /// Markup sanitized with `ammonia`.
    Html,
}

/// Message reported for each kind of violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldMessages {
    pub required: &'static str,
    pub max_length: &'static str,
    pub invalid: &'static str,
}

impl FieldMessages {
    pub const DEFAULT: Self = Self {
        required: "This field is required.",
        max_length: "Ensure this value is not too long.",
        invalid: "Enter a valid value.",
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Maximum length in characters of the normalized value.
    pub max_length: Option<usize>,
    pub messages: FieldMessages,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            max_length: None,
            messages: FieldMessages::DEFAULT,
        }
    }

    pub const fn text(name: &'static str, max_length: usize) -> Self {
        Self::new(name, FieldKind::Text).max_length(max_length)
    }

    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub const fn messages(mut self, messages: FieldMessages) -> Self {
        self.messages = messages;
        self
    }
}

/// Mistakes in a static field declaration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("field `{0}` is declared more than once")]
    DuplicateField(&'static str),

    #[error("field `{0}` declares a zero max length")]
    ZeroMaxLength(&'static str),

    #[error("field `{0}` declares an unsupported decimal precision")]
    InvalidDecimal(&'static str),

    #[error("field `{0}` has no cleaned value of the requested kind")]
    KindMismatch(&'static str),
}

/// One violation found while validating a submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every violation found in a submission, in field declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Messages reported for `field`.
    pub fn for_field(&self, field: &str) -> Vec<&'static str> {
        self.0
            .iter()
            .filter(|error| error.field == field)
            .map(|error| error.message)
            .collect()
    }

    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CleanedValue {
    Text(String),
    Date(NaiveDate),
    Decimal(i64),
}

impl CleanedValue {
    fn within(&self, max_length: Option<usize>) -> bool {
        match (self, max_length) {
            (Self::Text(text), Some(max)) => text.validate_length(None, Some(max as u64), None),
            _ => true,
        }
    }
}

/// Normalized values of the fields that were submitted.
///
/// Optional fields left blank are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanedData {
    values: BTreeMap<&'static str, CleanedValue>,
}

impl CleanedData {
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.values.get(field) {
            Some(CleanedValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn date(&self, field: &str) -> Option<NaiveDate> {
        match self.values.get(field) {
            Some(CleanedValue::Date(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn decimal(&self, field: &str) -> Option<i64> {
        match self.values.get(field) {
            Some(CleanedValue::Decimal(value)) => Some(*value),
            _ => None,
        }
    }

    /// Date of a required field; only a declaration mismatch can make it absent.
    pub fn required_date(&self, field: &'static str) -> Result<NaiveDate, SchemaError> {
        self.date(field).ok_or(SchemaError::KindMismatch(field))
    }
}

/// A checked field declaration able to validate submissions.
#[derive(Clone, Copy, Debug)]
pub struct FormSchema {
    fields: &'static [FieldSpec],
}

impl FormSchema {
    pub fn new(fields: &'static [FieldSpec]) -> Result<Self, SchemaError> {
        for (i, spec) in fields.iter().enumerate() {
            if fields[..i].iter().any(|other| other.name == spec.name) {
                return Err(SchemaError::DuplicateField(spec.name));
            }
            if spec.max_length == Some(0) {
                return Err(SchemaError::ZeroMaxLength(spec.name));
            }
            let bad_decimal = matches!(
                spec.kind,
                FieldKind::Decimal { max_digits, decimal_places }
                    if max_digits == 0
                        || max_digits > MAX_DECIMAL_DIGITS
                        || decimal_places > max_digits
            );
            if bad_decimal {
                return Err(SchemaError::InvalidDecimal(spec.name));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Validates `input` against every declared field.
    ///
    /// Values are trimmed first; fields not declared in the schema are ignored.
    pub fn validate(&self, input: &FormInput) -> Result<CleanedData, FieldErrors> {
        let mut cleaned = CleanedData::default();
        let mut errors = FieldErrors::default();

        for spec in self.fields {
            let raw = input.get(spec.name).map_or("", |value| value.trim());

            if !raw.validate_length(Some(1), None, None) {
                if spec.required {
                    errors.push(spec.name, spec.messages.required);
                }
                continue;
            }

            match clean_value(spec.kind, raw) {
                Some(CleanedValue::Text(text)) if text.is_empty() => {
                    if spec.required {
                        errors.push(spec.name, spec.messages.required);
                    }
                }
                Some(value) if !value.within(spec.max_length) => {
                    errors.push(spec.name, spec.messages.max_length);
                }
                Some(value) => {
                    cleaned.values.insert(spec.name, value);
                }
                None => errors.push(spec.name, spec.messages.invalid),
            }
        }

        if errors.is_empty() {
            Ok(cleaned)
        } else {
            Err(errors)
        }
    }
}

fn clean_value(kind: FieldKind, raw: &str) -> Option<CleanedValue> {
    match kind {
        FieldKind::Text => Some(CleanedValue::Text(raw.to_string())),
        FieldKind::Email => {
            let email = raw.to_lowercase();
            email.validate_email().then_some(CleanedValue::Text(email))
        }
        FieldKind::Phone => normalize_phone_to_e164(raw).ok().map(CleanedValue::Text),
        FieldKind::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .map(CleanedValue::Date),
        FieldKind::Decimal {
            max_digits,
            decimal_places,
        } => parse_decimal(raw, max_digits, decimal_places).map(CleanedValue::Decimal),
        FieldKind::Html => Some(CleanedValue::Text(ammonia::clean(raw).trim().to_string())),
    }
}

/// Parses `raw` into an integer scaled by `10^decimal_places`.
fn parse_decimal(raw: &str, max_digits: u8, decimal_places: u8) -> Option<i64> {
    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    if fraction.len() > usize::from(decimal_places) {
        return None;
    }
    let whole_digits = whole.trim_start_matches('0').len();
    if whole_digits > usize::from(max_digits - decimal_places) {
        return None;
    }

    let mut value: i64 = 0;
    for digit in whole.bytes().chain(fraction.bytes()) {
        value = value.checked_mul(10)?.checked_add(i64::from(digit - b'0'))?;
    }
    for _ in fraction.len()..usize::from(decimal_places) {
        value = value.checked_mul(10)?;
    }

    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME_MESSAGES: FieldMessages = FieldMessages {
        required: "Name is required.",
        max_length: "Name is too long.",
        invalid: "Name is invalid.",
    };

    static SAMPLE: [FieldSpec; 6] = [
        FieldSpec::text("name", 5).messages(NAME_MESSAGES),
        FieldSpec::new("email", FieldKind::Email),
        FieldSpec::new("phone", FieldKind::Phone).optional(),
        FieldSpec::new("born", FieldKind::Date).optional(),
        FieldSpec::new(
            "price",
            FieldKind::Decimal {
                max_digits: 5,
                decimal_places: 2,
            },
        )
        .optional(),
        FieldSpec::new("bio", FieldKind::Html).optional(),
    ];

    fn input(pairs: &[(&str, &str)]) -> FormInput {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn schema() -> FormSchema {
        FormSchema::new(&SAMPLE).unwrap()
    }

    #[test]
    fn valid_submission_is_normalized() {
        let cleaned = schema()
            .validate(&input(&[
                ("name", "  Ann "),
                ("email", "Ann@Example.com"),
                ("phone", "+1 202 555 0143"),
                ("born", "1990-04-01"),
                ("price", "12.5"),
                ("bio", "<b>hi</b><script>x</script>"),
                ("ignored", "value"),
            ]))
            .unwrap();

        assert_eq!(cleaned.text("name"), Some("Ann"));
        assert_eq!(cleaned.text("email"), Some("ann@example.com"));
        assert_eq!(cleaned.text("phone"), Some("+12025550143"));
        assert_eq!(cleaned.date("born"), NaiveDate::from_ymd_opt(1990, 4, 1));
        assert_eq!(cleaned.decimal("price"), Some(1250));
        assert_eq!(cleaned.text("bio"), Some("<b>hi</b>"));
        assert_eq!(cleaned.text("ignored"), None);
    }

    #[test]
    fn blank_optional_fields_are_absent() {
        let cleaned = schema()
            .validate(&input(&[("name", "Ann"), ("email", "a@b.io"), ("phone", "  ")]))
            .unwrap();

        assert_eq!(cleaned.text("phone"), None);
        assert_eq!(cleaned.date("born"), None);
    }

    #[test]
    fn violations_use_declared_messages_in_order() {
        let errors = schema()
            .validate(&input(&[
                ("name", "Annabelle"),
                ("email", "nope"),
                ("born", "01/04/1990"),
                ("price", "1234.5"),
                ("bio", "<script>x</script>"),
            ]))
            .unwrap_err();

        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "born", "price"]);
        assert_eq!(errors.for_field("name"), vec!["Name is too long."]);
        assert_eq!(errors.for_field("email"), vec!["Enter a valid value."]);
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let errors = schema().validate(&FormInput::new()).unwrap_err();

        assert_eq!(errors.for_field("name"), vec!["Name is required."]);
        assert_eq!(errors.for_field("email"), vec!["This field is required."]);
        assert_eq!(
            errors.to_string(),
            "name: Name is required.; email: This field is required."
        );
    }

    #[test]
    fn length_is_checked_after_normalization() {
        static PHONE: [FieldSpec; 1] = [FieldSpec::new("phone", FieldKind::Phone).max_length(15)];
        let schema = FormSchema::new(&PHONE).unwrap();

        let cleaned = schema
            .validate(&input(&[("phone", "+1 (202) 555-0143")]))
            .unwrap();

        assert_eq!(cleaned.text("phone"), Some("+12025550143"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let cleaned = schema()
            .validate(&input(&[("name", "Ærøñé"), ("email", "a@b.io")]))
            .unwrap();

        assert_eq!(cleaned.text("name"), Some("Ærøñé"));
    }

    #[test]
    fn required_date_reports_declaration_mismatch() {
        let cleaned = schema()
            .validate(&input(&[("name", "Ann"), ("email", "a@b.io"), ("born", "1990-04-01")]))
            .unwrap();

        assert_eq!(
            cleaned.required_date("born"),
            Ok(NaiveDate::from_ymd_opt(1990, 4, 1).unwrap())
        );
        assert_eq!(
            cleaned.required_date("name"),
            Err(SchemaError::KindMismatch("name"))
        );
    }

    #[test]
    fn schema_declarations_are_checked() {
        static DUPLICATE: [FieldSpec; 2] = [FieldSpec::text("a", 3), FieldSpec::text("a", 4)];
        static ZERO: [FieldSpec; 1] = [FieldSpec::text("a", 0)];
        static DECIMAL: [FieldSpec; 1] = [FieldSpec::new(
            "a",
            FieldKind::Decimal {
                max_digits: 2,
                decimal_places: 3,
            },
        )];

        assert_eq!(
            FormSchema::new(&DUPLICATE).unwrap_err(),
            SchemaError::DuplicateField("a")
        );
        assert_eq!(
            FormSchema::new(&ZERO).unwrap_err(),
            SchemaError::ZeroMaxLength("a")
        );
        assert_eq!(
            FormSchema::new(&DECIMAL).unwrap_err(),
            SchemaError::InvalidDecimal("a")
        );
    }

    #[test]
    fn decimals_respect_precision() {
        assert_eq!(parse_decimal("19.99", 10, 2), Some(1999));
        assert_eq!(parse_decimal("7", 10, 2), Some(700));
        assert_eq!(parse_decimal(".5", 10, 2), Some(50));
        assert_eq!(parse_decimal("-0.01", 10, 2), Some(-1));
        assert_eq!(parse_decimal("00012.00", 5, 2), Some(1200));
        assert_eq!(parse_decimal("1.234", 10, 2), None);
        assert_eq!(parse_decimal("12345678.9", 10, 2), Some(1234567890));
        assert_eq!(parse_decimal("123456789", 10, 2), None);
        assert_eq!(parse_decimal("1e3", 10, 2), None);
        assert_eq!(parse_decimal(".", 10, 2), None);
    }
}
