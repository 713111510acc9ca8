// SPDX-License-Identifier: MPL-2.0
//! Declarative per-field validation rules.
//!
//! A [`ValidationRule`] bundles the checks configured for one field. Checks
//! run in a fixed priority order and the first violation wins, so a field
//! reports at most one error at a time.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

/// Prebuilt patterns for common marketplace fields.
pub mod patterns {
    use regex::Regex;
    use std::sync::LazyLock;

    /// Matches `local@domain.tld` shaped addresses.
    pub static EMAIL: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex should compile"));

    /// Matches phone numbers with optional leading `+`, digits, spaces,
    /// dashes, and parentheses.
    pub static PHONE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^\+?[0-9 ()\-]{6,20}$").expect("phone regex should compile")
    });
}

type CustomCheck = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Validation configuration for a single field, built up fluently:
///
/// ```
/// use scrapmarket_core::forms::{patterns, ValidationRule};
///
/// let rule = ValidationRule::new()
///     .required()
///     .min_length(2)
///     .pattern(patterns::EMAIL.clone());
/// ```
#[derive(Clone, Default)]
pub struct ValidationRule {
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
    custom: Option<CustomCheck>,
}

impl ValidationRule {
    /// Creates an empty rule; a field with an empty rule is always valid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects empty or whitespace-only values.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Rejects values shorter than `min` characters.
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Rejects values longer than `max` characters.
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Rejects values the pattern does not match.
    #[must_use]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Adds a custom check returning an error message, or `None` if valid.
    ///
    /// Runs last, after every built-in check has passed.
    #[must_use]
    pub fn custom(mut self, check: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        self.custom = Some(Arc::new(check));
        self
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

/// Runs the rule's checks against `value` in priority order.
///
/// The field name selects the message for pattern mismatches: `email` and
/// `phone` get field-specific wording, everything else the generic one.
/// Never panics; an empty rule trivially passes.
pub(crate) fn validate_value(field: &str, value: &str, rule: &ValidationRule) -> Option<String> {
    if rule.required && value.trim().is_empty() {
        return Some("This field is required".to_string());
    }

    if let Some(min) = rule.min_length {
        if value.chars().count() < min {
            return Some(format!("Must be at least {min} characters"));
        }
    }

    if let Some(max) = rule.max_length {
        if value.chars().count() > max {
            return Some(format!("Must be no more than {max} characters"));
        }
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(value) {
            return Some(pattern_message(field));
        }
    }

    if let Some(check) = &rule.custom {
        return check(value);
    }

    None
}

fn pattern_message(field: &str) -> String {
    match field {
        "email" => "Please enter a valid email address".to_string(),
        "phone" => "Please enter a valid phone number".to_string(),
        _ => "Invalid format".to_string(),
    }
}
