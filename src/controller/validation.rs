//! Field validation rules

use crate::state::{FieldId, FieldKind};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum trimmed length for text answers
const MIN_TEXT_LEN: usize = 2;

/// Minimum trimmed length for phone numbers
const MIN_PHONE_LEN: usize = 10;

// One `@` between non-whitespace segments, with a dot in the domain part.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Digits, whitespace, dashes, plus signs and parentheses.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\d\s\-\+\(\)]+$").expect("PHONE_REGEX: invalid regex pattern")
});

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Check a field value against its rules.
///
/// Required fields must be filled in: e-mail fields must look like
/// `local@domain.tld`, anything else needs at least two characters.
/// Optional fields are only checked once they have content. Phone numbers
/// must use phone characters and have at least ten, free text needs two
/// characters (the subject line is exempt), everything else passes.
pub fn validate_value(field: FieldId, value: &str) -> bool {
    let kind = field.kind();

    if field.is_required() {
        return match kind {
            FieldKind::Email => EMAIL_REGEX.is_match(value),
            _ => trimmed_len(value) >= MIN_TEXT_LEN,
        };
    }

    if value.trim().is_empty() {
        return true;
    }

    match kind {
        FieldKind::Tel => PHONE_REGEX.is_match(value) && trimmed_len(value) >= MIN_PHONE_LEN,
        FieldKind::Text if field != FieldId::Subject => trimmed_len(value) >= MIN_TEXT_LEN,
        _ => true,
    }
}
