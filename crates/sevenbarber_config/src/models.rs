// --- File: crates/sevenbarber_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Google Calendar Config ---
// The service-account key itself is never part of the config. It comes from
// the environment variable named here, or from the key file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GcalConfig {
    pub calendar_id: String, // Mandatory
    #[serde(default = "default_key_path")]
    pub key_path: String,
    #[serde(default = "default_credentials_env_var")]
    pub credentials_env_var: String,
    /// IANA zone attached to every event, e.g. "America/Guayaquil".
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
}

// --- Shop / presentation Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShopConfig {
    pub name: String,
    pub address: String,
    /// Directory served under /assets. All image names below are relative to it.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
    #[serde(default = "default_banner_image")]
    pub banner_image: String,
    #[serde(default = "default_qr_image")]
    pub qr_image: String,
    #[serde(default = "default_map_image")]
    pub map_image: String,
    #[serde(default)]
    pub review_images: Vec<String>,
    pub review_url: Option<String>,
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoggingConfig {
    /// Minimum level for the service's own targets (trace, debug, info, warn, error).
    pub level: Option<String>,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub gcal: GcalConfig,
    pub shop: ShopConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_key_path() -> String {
    "credentials.json".to_string()
}

fn default_credentials_env_var() -> String {
    "GOOGLE_CREDENTIALS_JSON".to_string()
}

fn default_time_zone() -> String {
    "America/Guayaquil".to_string()
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

fn default_stylesheet() -> String {
    "css/style.css".to_string()
}

fn default_banner_image() -> String {
    "banner.png".to_string()
}

fn default_qr_image() -> String {
    "qr_pago.png".to_string()
}

fn default_map_image() -> String {
    "map.jpg".to_string()
}
