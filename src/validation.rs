//! Field validation and input sanitization.
//!
//! Two layers mirror the original forms: submit-time validators that reject
//! a whole record with a field-level error, and keystroke sanitizers that
//! silently drop disallowed characters instead of erroring.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::constants::{
    AGE_MAX, AGE_MIN, NAME_MAX_CHARS, NAME_MIN_CHARS, PASSWORD_MIN_CHARS, PHONE_MAX_DIGITS,
    PHONE_MIN_DIGITS, USERNAME_MIN_CHARS,
};
use crate::error::{AdminError, Result};
use crate::models::directory::NewDirectoryRecord;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zÁáÉéÍíÓóÚúÑñ\s]+$").expect("valid name regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-\s()]+$").expect("valid phone regex"));
static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid username regex"));

/// Validate a name-like field (letters, accented letters and spaces)
pub fn validate_name(field: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AdminError::validation(field, "es obligatorio"));
    }
    let chars = trimmed.chars().count();
    if chars < NAME_MIN_CHARS || chars > NAME_MAX_CHARS {
        return Err(AdminError::validation(
            field,
            format!("debe tener entre {NAME_MIN_CHARS} y {NAME_MAX_CHARS} caracteres"),
        ));
    }
    if !NAME_RE.is_match(trimmed) {
        return Err(AdminError::validation(
            field,
            "solo puede contener letras y espacios",
        ));
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AdminError::validation("email", "es obligatorio"));
    }
    if !EMAIL_RE.is_match(trimmed) {
        return Err(AdminError::validation(
            "email",
            "formato de correo inválido",
        ));
    }
    Ok(())
}

/// Validate a phone number: allowed characters plus overall length bounds
pub fn validate_phone(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AdminError::validation("phone", "es obligatorio"));
    }
    if !PHONE_RE.is_match(trimmed) {
        return Err(AdminError::validation(
            "phone",
            "solo puede contener números, espacios, guiones y paréntesis",
        ));
    }
    let len = trimmed.chars().count();
    if len < PHONE_MIN_DIGITS || len > PHONE_MAX_DIGITS {
        return Err(AdminError::validation(
            "phone",
            format!("debe tener entre {PHONE_MIN_DIGITS} y {PHONE_MAX_DIGITS} caracteres"),
        ));
    }
    Ok(())
}

/// Validate age bounds
pub fn validate_age(age: u8) -> Result<()> {
    if age < AGE_MIN || age > AGE_MAX {
        return Err(AdminError::validation(
            "age",
            format!("debe estar entre {AGE_MIN} y {AGE_MAX} años"),
        ));
    }
    Ok(())
}

/// Validate a login username (alphanumeric plus underscore)
pub fn validate_username(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.chars().count() < USERNAME_MIN_CHARS {
        return Err(AdminError::validation(
            "username",
            format!("debe tener al menos {USERNAME_MIN_CHARS} caracteres"),
        ));
    }
    if !USERNAME_RE.is_match(trimmed) {
        return Err(AdminError::validation(
            "username",
            "solo puede contener letras, números y guión bajo",
        ));
    }
    Ok(())
}

/// Validate a password
pub fn validate_password(value: &str) -> Result<()> {
    if value.chars().count() < PASSWORD_MIN_CHARS {
        return Err(AdminError::validation(
            "password",
            format!("debe tener al menos {PASSWORD_MIN_CHARS} caracteres"),
        ));
    }
    Ok(())
}

/// Validate a required free-text field
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AdminError::validation(field, "es obligatorio"));
    }
    Ok(())
}

/// Combined validation for creating or replacing a directory record
pub fn validate_directory_record(record: &NewDirectoryRecord) -> Result<()> {
    validate_name("firstName", &record.first_name)?;
    validate_name("lastName", &record.last_name)?;
    validate_email(&record.email)?;
    validate_phone(&record.phone)?;
    validate_age(record.age)?;
    Ok(())
}

// Keystroke sanitizers: the original forms block disallowed characters as
// they are typed rather than failing on submit. These reproduce that
// truncation-by-rejection policy for callers feeding raw input.

/// Keep letters (accented included) and spaces
pub fn sanitize_name_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect()
}

/// Keep the phone character set
pub fn sanitize_phone_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
        .collect()
}

/// Keep digits only
pub fn sanitize_digits_input(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keep the username character set
pub fn sanitize_username_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
