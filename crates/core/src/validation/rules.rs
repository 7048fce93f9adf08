//! Rule declaration types.
//!
//! A [`FieldRule`] names one input field, says whether it must be present,
//! and lists the [`Check`]s applied to it in order. Checks that sanitize
//! (trim, escape, integer conversion) rewrite the value seen by the checks
//! after them.

/// Whether an absent (missing or `null`) field is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// A single step in a field's rule chain.
///
/// Steps carrying an `Option<&str>` use that message when they fail, falling
/// back to the rule's base message when `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Strip surrounding whitespace.
    Trim,
    /// Fail on an empty string.
    NotEmpty(Option<&'static str>),
    /// Require a decimal number and convert it to its integer part.
    Integer(Option<&'static str>),
    /// Require an integer strictly greater than the bound.
    GreaterThan(i64, Option<&'static str>),
    /// Fail when the text is longer than the bound, counted in characters.
    MaxChars(u64, Option<&'static str>),
    /// HTML-escape the text.
    Escape,
}

/// Declared rules for one input field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub presence: Presence,
    /// Message used when the field is absent, not a scalar, or a check
    /// without its own message fails.
    pub message: &'static str,
    pub checks: &'static [Check],
}

impl FieldRule {
    pub const fn required(
        field: &'static str,
        message: &'static str,
        checks: &'static [Check],
    ) -> Self {
        Self {
            field,
            presence: Presence::Required,
            message,
            checks,
        }
    }

    pub const fn optional(
        field: &'static str,
        message: &'static str,
        checks: &'static [Check],
    ) -> Self {
        Self {
            field,
            presence: Presence::Optional,
            message,
            checks,
        }
    }
}
