use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub alert_config: AlertConfig,
    pub upload_config: UploadConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            alert_config: AlertConfig::default(),
            upload_config: UploadConfig::default(),
        }
    }
}

/// Duración (ms) de las alertas de cada vista
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    pub list_alert_ms: u32,
    pub upload_alert_ms: u32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            list_alert_ms: 5_000,
            upload_alert_ms: 8_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub default_limit: u32,
    pub max_bytes: u64,
    pub progress_hide_ms: u32,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            default_limit: 100,
            max_bytes: 5 * 1024 * 1024,
            progress_hide_ms: 1_000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            alert_config: AlertConfig {
                list_alert_ms: parse_or(option_env!("LIST_ALERT_MS"), defaults.alert_config.list_alert_ms),
                upload_alert_ms: parse_or(option_env!("UPLOAD_ALERT_MS"), defaults.alert_config.upload_alert_ms),
            },
            upload_config: UploadConfig {
                default_limit: parse_or(option_env!("UPLOAD_DEFAULT_LIMIT"), defaults.upload_config.default_limit),
                max_bytes: parse_or(option_env!("UPLOAD_MAX_BYTES"), defaults.upload_config.max_bytes),
                progress_hide_ms: parse_or(option_env!("PROGRESS_HIDE_MS"), defaults.upload_config.progress_hide_ms),
            },
        }
    }

    /// URL base sin "/" final, lista para concatenar rutas
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_views() {
        let config = AppConfig::default();
        assert_eq!(config.alert_config.list_alert_ms, 5_000);
        assert_eq!(config.alert_config.upload_alert_ms, 8_000);
        assert_eq!(config.upload_config.default_limit, 100);
        assert_eq!(config.upload_config.max_bytes, 5_242_880);
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = AppConfig {
            api_base_url: "http://api.local/api/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_base_url(), "http://api.local/api");
    }

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or::<u32>(Some("abc"), 7), 7);
        assert_eq!(parse_or::<u32>(Some(" 42 "), 7), 42);
        assert!(!parse_or::<bool>(Some("false"), true));
        assert_eq!(parse_or::<u32>(None, 3), 3);
    }
}
