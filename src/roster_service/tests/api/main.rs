mod create_account;
mod find_accounts_by_email;
mod get_account;
mod helpers;
mod verify_password;
