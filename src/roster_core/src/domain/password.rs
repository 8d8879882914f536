use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

pub const MAX_PASSWORD_LENGTH: usize = 128;

// Letters, numbers, punctuation and symbols by Unicode general category.
static ALLOWED_CHARACTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{N}\p{P}\p{S}]*$").expect("allowed pattern is a valid regex")
});

static SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}\p{S}]").expect("symbol pattern is a valid regex"));

/// A raw password that satisfies the credential policy.
///
/// Wrapped in [`Secret`] so it never shows up in `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(password: Secret<String>) -> Result<Self, PasswordError> {
        validate_password(password.expose_secret())?;
        Ok(Self(password))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// A self-describing credential hash (PHC string format).
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl From<String> for HashedPassword {
    fn from(value: String) -> Self {
        Self(Secret::new(value))
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("password must not be empty")]
    Empty,
    #[error("password must only contain letters, numbers, or special characters")]
    DisallowedCharacter,
    #[error("password must contain an uppercase character")]
    MissingUppercase,
    #[error("password must contain a lowercase character")]
    MissingLowercase,
    #[error("password must contain a number")]
    MissingDigit,
    #[error("password must contain a special character")]
    MissingSymbol,
    #[error("password must not be longer than {MAX_PASSWORD_LENGTH} characters")]
    TooLong,
}

type PasswordCheck = fn(&str) -> Option<PasswordError>;

const PASSWORD_CHECKS: &[PasswordCheck] = &[
    not_empty,
    allowed_characters,
    has_uppercase,
    has_lowercase,
    has_digit,
    has_symbol,
    within_length,
];

/// Check a raw password against the credential policy, reporting the first
/// violation.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    match PASSWORD_CHECKS.iter().find_map(|check| check(password)) {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

fn not_empty(password: &str) -> Option<PasswordError> {
    password.is_empty().then_some(PasswordError::Empty)
}

fn allowed_characters(password: &str) -> Option<PasswordError> {
    (!ALLOWED_CHARACTERS.is_match(password)).then_some(PasswordError::DisallowedCharacter)
}

fn has_uppercase(password: &str) -> Option<PasswordError> {
    (!password.chars().any(char::is_uppercase)).then_some(PasswordError::MissingUppercase)
}

fn has_lowercase(password: &str) -> Option<PasswordError> {
    (!password.chars().any(char::is_lowercase)).then_some(PasswordError::MissingLowercase)
}

fn has_digit(password: &str) -> Option<PasswordError> {
    (!password.chars().any(char::is_numeric)).then_some(PasswordError::MissingDigit)
}

fn has_symbol(password: &str) -> Option<PasswordError> {
    (!SYMBOL.is_match(password)).then_some(PasswordError::MissingSymbol)
}

fn within_length(password: &str) -> Option<PasswordError> {
    (password.chars().count() > MAX_PASSWORD_LENGTH).then_some(PasswordError::TooLong)
}
