use std::{fmt, str::FromStr};

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{email::Email, login::Login, password::HashedPassword};

/// Primary key of an account, generated at creation and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(id: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| AccountIdError(id.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AccountId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a valid account id")]
pub struct AccountIdError(String);

/// Validated input for a store write.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub login: Login,
    pub email: Email,
    pub hashed_password: HashedPassword,
}

/// An account as persisted, credential hash included.
///
/// Never leaves the service boundary; callers receive [`Account`].
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub id: AccountId,
    pub login: String,
    pub email: String,
    pub hashed_password: HashedPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AccountRecord {
    /// Stamp a fresh record: new id, both timestamps set to the same instant.
    ///
    /// Timestamps are truncated to microseconds so they survive a round trip
    /// through stores with microsecond precision.
    pub fn create(new_account: NewAccount) -> Self {
        let now = Utc::now().trunc_subsecs(6);
        Self {
            id: AccountId::new(),
            login: new_account.login.into_inner(),
            email: new_account.email.as_str().to_string(),
            hashed_password: new_account.hashed_password,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The caller-facing view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub login: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Self {
            id: record.id,
            login: record.login,
            email: record.email,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
