//! # Roster - Account Service Library
//!
//! Facade crate that re-exports the public APIs of the account service
//! components. Use this crate to get the domain types, the account service and
//! its store and hasher adapters in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Account`, `Login`, `Email`, `Password`, `RequestContext`
//! - **Ports**: `AccountStore`, `CredentialHasher`
//! - **Use cases**: `AccountService` and the per-operation use cases
//! - **Adapters**: `HashMapAccountStore`, `PostgresAccountStore`, `RedisAccountStore`, `Argon2Hasher`
//! - **Service**: `AccountsServer` - the HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use roster_core::*;
}

// Re-export most commonly used core types at the root level
pub use roster_core::{
    Account, AccountId, AccountRecord, Email, HashedPassword, Interrupted, Login, NewAccount,
    Password, RequestContext, validate_login, validate_password,
};

// ============================================================================
// Ports
// ============================================================================

/// Store and hasher trait definitions
pub mod repositories {
    pub use roster_core::{AccountStore, AccountStoreError, CredentialHasher, HashingError};
}

pub use repositories::{AccountStore, AccountStoreError, CredentialHasher, HashingError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use roster_application::*;
}

pub use roster_application::{
    AccountPolicy, AccountService, AccountServiceError, CreateAccountRequest, GetAccountRequest,
    VerifyPasswordRequest,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use roster_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use roster_adapters::persistence::*;
    }

    /// Credential hashing
    pub mod hashing {
        pub use roster_adapters::hashing::*;
    }

    /// Configuration
    pub mod config {
        pub use roster_adapters::config::*;
    }
}

pub use roster_adapters::{
    config::Settings,
    hashing::Argon2Hasher,
    persistence::{HashMapAccountStore, PostgresAccountStore, RedisAccountStore},
};

// ============================================================================
// Accounts Server (Main Entry Point)
// ============================================================================

pub use roster_service::{AccountsServer, configure_postgresql, configure_redis, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing store and hasher traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

/// Re-export the cancellation token carried by `RequestContext`
pub use tokio_util::sync::CancellationToken;
