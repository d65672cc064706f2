use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::page::effects::{Effect, Target, ERROR_BORDER, NEUTRAL_BORDER};

const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];
}

/// Why a field was rejected. The display text is shown to the visitor as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Current raw values of the three contact inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// Browser `trim()` also strips the byte order mark, which Rust does not
/// count as whitespace.
fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Length as the browser reports it, in UTF-16 code units.
fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap())
}

pub fn validate_name(raw: &str) -> Result<(), FieldError> {
    let name = trim_input(raw);
    if name.is_empty() {
        return Err(FieldError::NameRequired);
    }
    if text_length(name) < MIN_NAME_LEN {
        return Err(FieldError::NameTooShort);
    }
    Ok(())
}

pub fn validate_email(raw: &str) -> Result<(), FieldError> {
    let email = trim_input(raw);
    if email.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !email_pattern().is_match(email) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_message(raw: &str) -> Result<(), FieldError> {
    let message = trim_input(raw);
    if message.is_empty() {
        return Err(FieldError::MessageRequired);
    }
    if text_length(message) < MIN_MESSAGE_LEN {
        return Err(FieldError::MessageTooShort);
    }
    Ok(())
}

pub fn validate(field: Field, raw: &str) -> Result<(), FieldError> {
    match field {
        Field::Name => validate_name(raw),
        Field::Email => validate_email(raw),
        Field::Message => validate_message(raw),
    }
}

pub fn show_error(field: Field, error: FieldError) -> Vec<Effect> {
    vec![
        Effect::SetText(Target::FieldError(field), error.to_string()),
        Effect::style(Target::FieldError(field), "display", "block"),
        Effect::style(Target::Field(field), "border-color", ERROR_BORDER),
    ]
}

pub fn clear_error(field: Field) -> Vec<Effect> {
    vec![
        Effect::style(Target::FieldError(field), "display", "none"),
        Effect::style(Target::Field(field), "border-color", NEUTRAL_BORDER),
    ]
}

/// Blur: validate and either show the failure or clear a stale one.
pub fn on_blur(field: Field, raw: &str) -> Vec<Effect> {
    match validate(field, raw) {
        Ok(()) => clear_error(field),
        Err(error) => show_error(field, error),
    }
}

/// Typing only ever clears; a new error waits for the next blur or submit.
pub fn on_input(field: Field, raw: &str) -> Vec<Effect> {
    if trim_input(raw).is_empty() {
        Vec::new()
    } else {
        clear_error(field)
    }
}

/// Runs every validator, not stopping at the first failure, so all invalid
/// fields light up together. Returns whether the form may be sent.
pub fn validate_form(values: &FieldValues) -> (bool, Vec<Effect>) {
    let mut all_valid = true;
    let mut effects = Vec::new();
    for field in Field::ALL {
        match validate(field, values.get(field)) {
            Ok(()) => effects.extend(clear_error(field)),
            Err(error) => {
                all_valid = false;
                effects.extend(show_error(field, error));
            }
        }
    }
    (all_valid, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::effects::fake::FakePage;
    use crate::page::effects::Surface;

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name(""), Err(FieldError::NameRequired));
        assert_eq!(validate_name("   "), Err(FieldError::NameRequired));
        assert_eq!(validate_name("A"), Err(FieldError::NameTooShort));
        assert_eq!(validate_name(" A "), Err(FieldError::NameTooShort));
        assert_eq!(validate_name("Al"), Ok(()));
    }

    #[test]
    fn test_name_messages() {
        assert_eq!(FieldError::NameRequired.to_string(), "Name is required");
        assert_eq!(
            FieldError::NameTooShort.to_string(),
            "Name must be at least 2 characters"
        );
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email("a@b.co"), Ok(()));
        assert_eq!(validate_email("  a@b.co  "), Ok(()));
        assert_eq!(validate_email(""), Err(FieldError::EmailRequired));
        assert_eq!(validate_email("notanemail"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@bco"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a.b@co"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a @b.co"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@ b.co"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@@b.co"), Err(FieldError::EmailInvalid));
    }

    #[test]
    fn test_email_messages() {
        assert_eq!(FieldError::EmailRequired.to_string(), "Email is required");
        assert_eq!(
            FieldError::EmailInvalid.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_message_length_boundary() {
        assert_eq!(validate_message(""), Err(FieldError::MessageRequired));
        assert_eq!(validate_message("123456789"), Err(FieldError::MessageTooShort));
        assert_eq!(
            validate_message("   123456789   "),
            Err(FieldError::MessageTooShort)
        );
        assert_eq!(validate_message("1234567890"), Ok(()));
    }

    #[test]
    fn test_blur_shows_then_clears() {
        let page = FakePage::default();
        page.apply_all(&on_blur(Field::Name, "A"));
        assert_eq!(
            page.text(&Target::FieldError(Field::Name)).as_deref(),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(page.style(Target::FieldError(Field::Name), "display"), Some("block"));
        assert_eq!(
            page.style(Target::Field(Field::Name), "border-color"),
            Some(ERROR_BORDER)
        );

        page.apply_all(&on_blur(Field::Name, "Alice"));
        assert_eq!(page.style(Target::FieldError(Field::Name), "display"), Some("none"));
        assert_eq!(
            page.style(Target::Field(Field::Name), "border-color"),
            Some(NEUTRAL_BORDER)
        );
    }

    #[test]
    fn test_input_clears_only_when_non_empty() {
        assert!(on_input(Field::Email, "  ").is_empty());
        // Still invalid, but typing never re-shows the error.
        assert_eq!(on_input(Field::Email, "a"), clear_error(Field::Email));
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        // One emoji is two UTF-16 units, enough for a name.
        assert_eq!(validate_name("😀"), Ok(()));
        assert_eq!(validate_message("😀😀😀😀😀"), Ok(()));
        assert_eq!(validate_message("😀😀😀😀a"), Err(FieldError::MessageTooShort));
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(validate_name("\u{FEFF}"), Err(FieldError::NameRequired));
        assert_eq!(validate_name("\u{FEFF}Al\u{FEFF}"), Ok(()));
        assert_eq!(validate_email("\u{FEFF}"), Err(FieldError::EmailRequired));
        assert_eq!(validate_email("a\u{FEFF}@b.co"), Err(FieldError::EmailInvalid));
        assert!(on_input(Field::Message, "\u{FEFF} ").is_empty());
    }

    #[test]
    fn test_submit_reports_every_invalid_field() {
        let values = FieldValues {
            name: "".to_string(),
            email: "bob@example.com".to_string(),
            message: "short".to_string(),
        };
        let (valid, effects) = validate_form(&values);
        assert!(!valid);

        let page = FakePage::default();
        page.apply_all(&effects);
        assert_eq!(
            page.text(&Target::FieldError(Field::Name)).as_deref(),
            Some("Name is required")
        );
        assert_eq!(
            page.text(&Target::FieldError(Field::Message)).as_deref(),
            Some("Message must be at least 10 characters")
        );
        assert_eq!(page.style(Target::FieldError(Field::Email), "display"), Some("none"));
    }

    #[test]
    fn test_valid_form_passes() {
        let values = FieldValues {
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            message: "Hello there, world".to_string(),
        };
        let (valid, effects) = validate_form(&values);
        assert!(valid);
        assert!(!effects.iter().any(|e| matches!(e, Effect::SetText(..))));
    }
}
