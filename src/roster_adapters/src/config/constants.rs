pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const REDIS_URL_ENV_VAR: &str = "REDIS_URL";
}

pub const CONFIG_DIR: &str = "config";
pub const DEFAULT_ENVIRONMENT: &str = "local";

/// Lets a caller shorten, never extend, the configured request deadline.
pub const REQUEST_TIMEOUT_HEADER: &str = "x-request-timeout-ms";

pub mod prod {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 5785;
    pub const REQUEST_TIMEOUT_MS: u64 = 5000;

    pub mod hashing {
        pub const MEMORY_KIB: u32 = 15000;
        pub const ITERATIONS: u32 = 2;
        pub const PARALLELISM: u32 = 1;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    pub mod hashing {
        pub const MEMORY_KIB: u32 = 64;
        pub const ITERATIONS: u32 = 1;
        pub const PARALLELISM: u32 = 1;
    }
}
