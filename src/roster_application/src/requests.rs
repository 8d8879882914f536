//! Inbound request shapes and their structural validation.
//!
//! Structural validation only asks whether the required fields are present.
//! Format rules for logins, passwords and emails are applied afterwards by
//! the use cases.

use std::fmt;

use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Clone)]
pub struct CreateAccountRequest {
    pub login: String,
    pub email: String,
    pub password: Secret<String>,
}

impl CreateAccountRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        require("login", &self.login)?;
        require("email", &self.email)?;
        require("password", self.password.expose_secret())
    }
}

/// How a caller identifies an existing account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountLookup {
    Id(String),
    Login(String),
}

impl fmt::Display for AccountLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountLookup::Id(id) => write!(f, "id {id}"),
            AccountLookup::Login(login) => write!(f, "login {login}"),
        }
    }
}

/// Resolve the lookup key from optional id/login fields. The id wins when
/// both are set; blank values count as absent.
fn lookup_from(id: Option<&str>, login: Option<&str>) -> Option<AccountLookup> {
    let present = |value: Option<&str>| value.filter(|v| !v.is_empty()).map(str::to_string);

    present(id)
        .map(AccountLookup::Id)
        .or_else(|| present(login).map(AccountLookup::Login))
}

#[derive(Debug, Clone, Default)]
pub struct GetAccountRequest {
    pub id: Option<String>,
    pub login: Option<String>,
}

impl GetAccountRequest {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            login: None,
        }
    }

    pub fn by_login(login: impl Into<String>) -> Self {
        Self {
            id: None,
            login: Some(login.into()),
        }
    }

    pub fn lookup(&self) -> Option<AccountLookup> {
        lookup_from(self.id.as_deref(), self.login.as_deref())
    }
}

#[derive(Debug, Clone)]
pub struct VerifyPasswordRequest {
    pub id: Option<String>,
    pub login: Option<String>,
    pub password: Secret<String>,
}

impl VerifyPasswordRequest {
    pub fn by_id(id: impl Into<String>, password: Secret<String>) -> Self {
        Self {
            id: Some(id.into()),
            login: None,
            password,
        }
    }

    pub fn by_login(login: impl Into<String>, password: Secret<String>) -> Self {
        Self {
            id: None,
            login: Some(login.into()),
            password,
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        require("password", self.password.expose_secret())
    }

    pub fn lookup(&self) -> Option<AccountLookup> {
        lookup_from(self.id.as_deref(), self.login.as_deref())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), RequestError> {
    if value.is_empty() {
        return Err(RequestError::MissingField(field));
    }
    Ok(())
}
