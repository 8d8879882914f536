use std::fmt;

use thiserror::Error;

pub const MAX_LOGIN_LENGTH: usize = 64;

/// A login handle that satisfies the format policy.
///
/// Letters, digits, `_` and `.` only. Separators may not lead, trail or sit
/// next to each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    pub fn parse(login: impl Into<String>) -> Result<Self, LoginError> {
        let login = login.into();
        validate_login(&login)?;
        Ok(Self(login))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Login {
    type Error = LoginError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Login {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("login must not be empty")]
    Empty,
    #[error("login must only contain letters, numbers, underscores or periods")]
    DisallowedCharacter,
    #[error("login must not start with an underscore")]
    LeadingUnderscore,
    #[error("login must not end with an underscore")]
    TrailingUnderscore,
    #[error("login must not start with a period")]
    LeadingPeriod,
    #[error("login must not end with a period")]
    TrailingPeriod,
    #[error("login must not have two consecutive underscores or periods")]
    ConsecutiveSeparators,
    #[error("login must not be longer than {MAX_LOGIN_LENGTH} characters")]
    TooLong,
}

type LoginCheck = fn(&str) -> Option<LoginError>;

// Evaluated in order; the first violation wins.
const LOGIN_CHECKS: &[LoginCheck] = &[
    not_empty,
    allowed_characters,
    no_leading_underscore,
    no_trailing_underscore,
    no_leading_period,
    no_trailing_period,
    no_consecutive_separators,
    within_length,
];

/// Check a login against the format policy, reporting the first violation.
pub fn validate_login(login: &str) -> Result<(), LoginError> {
    match LOGIN_CHECKS.iter().find_map(|check| check(login)) {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '.'
}

fn not_empty(login: &str) -> Option<LoginError> {
    login.is_empty().then_some(LoginError::Empty)
}

fn allowed_characters(login: &str) -> Option<LoginError> {
    login
        .chars()
        .any(|c| !(c.is_alphabetic() || c.is_numeric() || is_separator(c)))
        .then_some(LoginError::DisallowedCharacter)
}

fn no_leading_underscore(login: &str) -> Option<LoginError> {
    login
        .starts_with('_')
        .then_some(LoginError::LeadingUnderscore)
}

fn no_trailing_underscore(login: &str) -> Option<LoginError> {
    login
        .ends_with('_')
        .then_some(LoginError::TrailingUnderscore)
}

fn no_leading_period(login: &str) -> Option<LoginError> {
    login.starts_with('.').then_some(LoginError::LeadingPeriod)
}

fn no_trailing_period(login: &str) -> Option<LoginError> {
    login.ends_with('.').then_some(LoginError::TrailingPeriod)
}

fn no_consecutive_separators(login: &str) -> Option<LoginError> {
    let chars: Vec<char> = login.chars().collect();
    chars
        .windows(2)
        .any(|pair| is_separator(pair[0]) && is_separator(pair[1]))
        .then_some(LoginError::ConsecutiveSeparators)
}

fn within_length(login: &str) -> Option<LoginError> {
    (login.chars().count() > MAX_LOGIN_LENGTH).then_some(LoginError::TooLong)
}
