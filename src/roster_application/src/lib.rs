pub mod account_service;
pub mod error;
pub mod requests;
pub mod use_cases;

#[cfg(test)]
mod mocks;

pub use account_service::{AccountPolicy, AccountService};
pub use error::AccountServiceError;
pub use requests::{
    AccountLookup, CreateAccountRequest, GetAccountRequest, RequestError, VerifyPasswordRequest,
};
pub use use_cases::{
    CreateAccountUseCase, FindAccountsByEmailUseCase, GetAccountUseCase, VerifyPasswordUseCase,
};
