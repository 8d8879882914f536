use roster_core::{
    AccountStoreError, EmailError, HashingError, Interrupted, LoginError, PasswordError,
};

use crate::requests::RequestError;

/// Classified outcome of a failed account operation.
#[derive(Debug, thiserror::Error)]
pub enum AccountServiceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("Request cancelled")]
    Cancelled,
    #[error("Deadline exceeded")]
    DeadlineExceeded,
}

impl From<RequestError> for AccountServiceError {
    fn from(error: RequestError) -> Self {
        AccountServiceError::InvalidArgument(error.to_string())
    }
}

impl From<LoginError> for AccountServiceError {
    fn from(error: LoginError) -> Self {
        AccountServiceError::InvalidArgument(format!("login invalid: {error}"))
    }
}

impl From<PasswordError> for AccountServiceError {
    fn from(error: PasswordError) -> Self {
        AccountServiceError::InvalidArgument(format!("password invalid: {error}"))
    }
}

impl From<EmailError> for AccountServiceError {
    fn from(error: EmailError) -> Self {
        AccountServiceError::InvalidArgument(format!("email invalid: {error}"))
    }
}

impl From<Interrupted> for AccountServiceError {
    fn from(interrupted: Interrupted) -> Self {
        match interrupted {
            Interrupted::Cancelled => AccountServiceError::Cancelled,
            Interrupted::DeadlineExceeded => AccountServiceError::DeadlineExceeded,
        }
    }
}

impl From<HashingError> for AccountServiceError {
    fn from(error: HashingError) -> Self {
        AccountServiceError::Internal(error.to_string())
    }
}

impl From<AccountStoreError> for AccountServiceError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::LoginTaken => AccountServiceError::AlreadyExists(error.to_string()),
            AccountStoreError::Interrupted(interrupted) => interrupted.into(),
            AccountStoreError::Corrupted(_) | AccountStoreError::UnexpectedError(_) => {
                AccountServiceError::Internal(error.to_string())
            }
        }
    }
}
