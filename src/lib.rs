// Re-export core functionality for external use
pub use async_trait::async_trait;

// Core module definitions
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod services;
pub mod store;
pub mod utils;
pub mod validation;

// Unified error handling
pub use error::{AdminError, Result};

// Essential re-exports for convenience
pub use config::settings::Config;
pub use handlers::api::AdminApi;
pub use utils::response::ApiResponse;

// Store abstractions
pub use store::{FileStore, KeyValueStore, MemoryStore};

// Model exports
pub use models::{
    Account, AccountView, ContactMessage, ContactRequest, DirectoryRecord, LoginOutcome,
    NewAccount, NewDirectoryRecord, ProfileUpdate, Role, Theme, TokenClaims,
};

// Version and build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        AdminApi, AdminError, ApiResponse, Config, KeyValueStore, MemoryStore, Result, NAME,
        VERSION,
    };

    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use tracing::{debug, error, info, warn};
}
