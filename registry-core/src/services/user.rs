//! User service - registration, lookup, deactivation and reporting

use tracing::{debug, warn};

use crate::adapters::InMemoryUserRepository;
use crate::config::Config;
use crate::domain::result::Result;
use crate::domain::{NewUser, User};
use crate::ports::UserRepository;

use super::logging::{LogEvent, LoggingService};
use super::report;

/// User service owning the registry store
///
/// Creation is the only fallible operation. Lookups and deactivation never
/// fail: an unknown id yields `None` / `false`.
pub struct UserService<R = InMemoryUserRepository> {
    repository: R,
    config: Config,
    activity: LoggingService,
}

impl UserService<InMemoryUserRepository> {
    /// Service backed by a fresh in-memory store
    pub fn in_memory(config: Config) -> Self {
        Self::new(InMemoryUserRepository::new(), config)
    }
}

impl Default for UserService<InMemoryUserRepository> {
    fn default() -> Self {
        Self::in_memory(Config::default())
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, config: Config) -> Self {
        Self {
            repository,
            config,
            activity: LoggingService::new(),
        }
    }

    /// Register a new user
    ///
    /// Fails with a validation error when name, email or age is missing, or
    /// when the age is below the configured minimum. Nothing is stored on
    /// failure. The returned record starts out active.
    pub fn create_user(&mut self, new_user: NewUser) -> Result<&User> {
        let id = self.fresh_id();

        let user = match User::from_new(id, new_user, self.config.minimum_age) {
            Ok(user) => user,
            Err(e) => {
                warn!("Rejected user creation: {}", e);
                self.activity.log_error("user_rejected", &e.to_string());
                return Err(e.into());
            }
        };

        let stored = self.repository.insert(user)?;
        debug!("Created user {}", stored.id);
        self.activity
            .log(LogEvent::new("user_created").with_user(stored.id.as_str()));
        Ok(stored)
    }

    /// Look up a user; `None` for an empty or unknown id
    pub fn get_user_by_id(&self, id: &str) -> Option<&User> {
        if id.is_empty() {
            return None;
        }
        self.repository.get(id)
    }

    /// Deactivate a non-admin user
    ///
    /// Returns `false` for unknown ids and for admins (whose status is left
    /// untouched). Deactivating an already inactive user returns `true`.
    pub fn deactivate_user(&mut self, id: &str) -> bool {
        if id.is_empty() {
            return false;
        }
        let Some(user) = self.repository.get_mut(id) else {
            return false;
        };

        if user.is_admin {
            warn!("Refused to deactivate admin user {}", id);
            self.activity
                .log(LogEvent::new("deactivation_refused").with_user(id));
            return false;
        }

        user.deactivate();
        debug!("Deactivated user {}", id);
        self.activity
            .log(LogEvent::new("user_deactivated").with_user(id));
        true
    }

    /// Plain text report of every user in registration order
    pub fn generate_user_report(&self) -> String {
        report::render(self.repository.list(), self.config.report_locale)
    }

    /// All users in registration order
    pub fn list_users(&self) -> Vec<&User> {
        self.repository.list()
    }

    pub fn user_count(&self) -> usize {
        self.repository.len()
    }

    /// Remove every user from the store
    pub fn clear(&mut self) {
        let removed = self.repository.len();
        self.repository.clear();
        debug!("Cleared {} users", removed);
        self.activity.log_event("store_cleared");
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Journal of registry events
    pub fn activity(&self) -> &LoggingService {
        &self.activity
    }

    /// Random id not held by any stored record
    fn fresh_id(&self) -> String {
        loop {
            let id = User::generate_id();
            if !self.repository.contains(&id) {
                return id;
            }
        }
    }
}
