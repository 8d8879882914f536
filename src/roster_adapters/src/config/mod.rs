pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AccountSettings, ApplicationSettings, HashingSettings, PostgresSettings, RedisSettings,
    Settings, StoreBackend, StoreSettings,
};
