pub mod create_account;
pub mod error;
pub mod find_accounts_by_email;
pub mod get_account;
pub mod verify_password;

pub use create_account::{AccountResponse, CreateAccountBody, create_account};
pub use error::{AccountApiError, ErrorResponse};
pub use find_accounts_by_email::{
    AccountsResponse, FindAccountsByEmailParams, find_accounts_by_email,
};
pub use get_account::{GetAccountParams, MaybeAccountResponse, get_account};
pub use verify_password::{VerifyPasswordBody, verify_password};
