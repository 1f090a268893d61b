//! Registry Core - in-memory user registry
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User, NewUser) and error types
//! - **ports**: Trait definitions for external dependencies (UserRepository)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (in-memory store)

pub mod domain;
pub mod ports;
pub mod services;
pub mod adapters;
pub mod config;

use std::path::Path;

use anyhow::Result;

use config::Config;
use services::UserService;

// Re-export commonly used types at crate root
pub use domain::{NewUser, User, UserStatus, ValidationError};
pub use domain::result::Error;
pub use services::ReportLocale;

/// Main context for registry operations
///
/// Holds the configuration and the user service with its store.
pub struct RegistryContext {
    pub config: Config,
    pub user_service: UserService,
}

impl RegistryContext {
    /// Create a context configured from `registry_dir`
    pub fn new(registry_dir: &Path) -> Result<Self> {
        let config = Config::load(registry_dir)?;
        Ok(Self::with_config(config))
    }

    /// Create a context from an already built configuration
    pub fn with_config(config: Config) -> Self {
        let user_service = UserService::in_memory(config.clone());
        Self {
            config,
            user_service,
        }
    }
}
