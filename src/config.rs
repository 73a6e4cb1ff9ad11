// ============================================================================
// CONFIG - Configuración en tiempo de compilación
// ============================================================================
// Los valores vienen de option_env! (build.rs reenvía el .env local).
// ============================================================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_PAGE_WINDOW_SIZE: u32 = 5;
pub const DEFAULT_NETWORK_TIMEOUT_SECONDS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub page_size: u32,
    pub page_window_size: u32,
    pub network_timeout_seconds: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_window_size: DEFAULT_PAGE_WINDOW_SIZE,
            network_timeout_seconds: DEFAULT_NETWORK_TIMEOUT_SECONDS,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
            option_env!("PAGE_SIZE"),
            option_env!("PAGE_WINDOW_SIZE"),
            option_env!("NETWORK_TIMEOUT_SECONDS"),
        )
    }

    /// Valores inválidos o ausentes caen al default correspondiente
    fn from_values(
        backend_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        page_size: Option<&str>,
        page_window_size: Option<&str>,
        network_timeout_seconds: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.backend_url),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level.map(str::to_string).unwrap_or(defaults.log_level),
            page_size: page_size
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_size),
            page_window_size: page_window_size
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_window_size),
            network_timeout_seconds: network_timeout_seconds
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.network_timeout_seconds),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel para wasm_logger; solo errores si el logging está deshabilitado
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }

    pub fn network_timeout_ms(&self) -> u32 {
        self.network_timeout_seconds.saturating_mul(1000)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
