pub mod context;
pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use context::{Interrupted, RequestContext};

pub use domain::{
    account::{Account, AccountId, AccountIdError, AccountRecord, NewAccount},
    email::{Email, EmailError},
    login::{Login, LoginError, validate_login},
    password::{HashedPassword, Password, PasswordError, validate_password},
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{CredentialHasher, HashingError},
};
