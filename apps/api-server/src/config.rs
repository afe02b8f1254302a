//! Application configuration loaded from environment variables.

use std::env;

use bloglist_infra::{DatabaseConfig, JwtConfig};

/// Deployment environment, from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Test,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "test" => AppEnv::Test,
            "production" | "prod" => AppEnv::Production,
            _ => AppEnv::Development,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub env: AppEnv,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        // Tests run against their own database so they can wipe it freely.
        let url_var = match env {
            AppEnv::Test => "TEST_DATABASE_URL",
            _ => "DATABASE_URL",
        };

        let database = env::var(url_var).ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3003),
            env,
            database,
            jwt: JwtConfig::from_env(),
        }
    }

    /// Whether the `/api/testing` routes are mounted.
    pub fn testing_routes_enabled(&self) -> bool {
        self.env == AppEnv::Test
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_app_env() {
        assert_eq!(AppEnv::parse("test"), AppEnv::Test);
        assert_eq!(AppEnv::parse("PRODUCTION"), AppEnv::Production);
        assert_eq!(AppEnv::parse("prod"), AppEnv::Production);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
    }
}
