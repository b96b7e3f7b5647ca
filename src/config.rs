// ============================================================================
// CONFIG - Compile-time configuration
// ============================================================================
// Values come from `option_env!`; build.rs forwards them from an optional .env
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub timer_config: TimerConfig,
    pub listing_config: ListingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Period of the order-status simulator
    pub status_interval_ms: u32,
    /// Delay between a successful checkout and the tracking redirect
    pub redirect_delay_ms: u32,
    pub toast_duration_ms: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            status_interval_ms: 7_000,
            redirect_delay_ms: 2_000,
            toast_duration_ms: 4_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    pub page_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self { page_size: 8 }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            timer_config: TimerConfig::default(),
            listing_config: ListingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            environment: option_env!("FOODIE_ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: parse_or(option_env!("FOODIE_ENABLE_LOGGING"), defaults.enable_logging),
            log_level: option_env!("FOODIE_LOG_LEVEL").unwrap_or("info").to_string(),
            timer_config: TimerConfig {
                status_interval_ms: parse_or(
                    option_env!("FOODIE_STATUS_INTERVAL_MS"),
                    defaults.timer_config.status_interval_ms,
                ),
                redirect_delay_ms: parse_or(
                    option_env!("FOODIE_REDIRECT_DELAY_MS"),
                    defaults.timer_config.redirect_delay_ms,
                ),
                toast_duration_ms: parse_or(
                    option_env!("FOODIE_TOAST_DURATION_MS"),
                    defaults.timer_config.toast_duration_ms,
                ),
            },
            listing_config: ListingConfig {
                page_size: parse_or(
                    option_env!("FOODIE_LISTING_PAGE_SIZE"),
                    defaults.listing_config.page_size,
                )
                .max(1),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Log level for the console logger; unknown names fall back to `Info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
