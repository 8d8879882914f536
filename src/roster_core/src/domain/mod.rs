pub mod account;
pub mod email;
pub mod login;
pub mod password;
