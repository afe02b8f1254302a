//! Application state - shared across all handlers.

use std::sync::Arc;

use bloglist_core::ports::{BlogRepository, PasswordService, TokenService, UserRepository};
use bloglist_infra::{
    Argon2PasswordService, InMemoryBlogRepository, InMemoryUserRepository, JwtTokenService,
};

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use bloglist_infra::DatabaseConnections;
#[cfg(feature = "postgres")]
use bloglist_infra::database::{PostgresBlogRepository, PostgresUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub blogs: Arc<dyn BlogRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    /// Backend name reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        #[cfg(feature = "postgres")]
        let state = match &config.database {
            Some(db_config) => match DatabaseConnections::init(db_config).await {
                Ok(connections) => Self {
                    users: Arc::new(PostgresUserRepository::new(connections.main.clone())),
                    blogs: Arc::new(PostgresBlogRepository::new(connections.main)),
                    tokens,
                    passwords,
                    storage: "postgres",
                },
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory(tokens, passwords)
                }
            },
            None => {
                tracing::warn!("Database URL not set. Running without database (in-memory mode).");
                Self::in_memory(tokens, passwords)
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory(tokens, passwords)
        };

        tracing::info!("Application state initialized");
        state
    }

    /// State backed by in-memory repositories.
    pub fn in_memory(tokens: Arc<dyn TokenService>, passwords: Arc<dyn PasswordService>) -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            blogs: Arc::new(InMemoryBlogRepository::new()),
            tokens,
            passwords,
            storage: "memory",
        }
    }
}
