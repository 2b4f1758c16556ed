// ============================================================================
// CONFIG - Compile-time configuration (.env -> build.rs -> option_env!)
// ============================================================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_SERVER_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_POLL_SECONDS: u32 = 30;
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// REST root, e.g. `http://localhost:8080/api`
    pub api_base_url: String,
    /// Server root used for static uploads (`{server}/uploads/{file}`)
    pub server_base_url: String,
    pub notification_poll_seconds: u32,
    pub max_upload_bytes: u64,
    /// Acting user id when the stored session carries none
    pub default_user_id: u64,
    pub default_course_id: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            server_base_url: DEFAULT_SERVER_BASE_URL.to_string(),
            notification_poll_seconds: DEFAULT_POLL_SECONDS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            default_user_id: 1,
            default_course_id: "it".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Reads the values baked in at compile time, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            server_base_url: option_env!("SERVER_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.server_base_url),
            notification_poll_seconds: option_env!("NOTIFICATION_POLL_SECONDS")
                .and_then(|s| s.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.notification_poll_seconds),
            max_upload_bytes: option_env!("MAX_UPLOAD_BYTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_upload_bytes),
            default_user_id: option_env!("DEFAULT_USER_ID")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.default_user_id),
            default_course_id: option_env!("DEFAULT_COURSE_ID")
                .map(|s| s.to_string())
                .unwrap_or(defaults.default_course_id),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    pub fn poll_interval_ms(&self) -> u32 {
        self.notification_poll_seconds.saturating_mul(1000)
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.poll_interval_ms(), 30_000);
        assert_eq!(config.max_upload_bytes, 2 * 1024 * 1024);
    }

    #[test]
    fn logging_switch_lowers_level() {
        let config = AppConfig {
            enable_logging: false,
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
