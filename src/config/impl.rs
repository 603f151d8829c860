use std::sync::OnceLock;

use super::AppConfig;
use crate::errors::Result;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Initialize the global configuration
///
/// Loads configuration from `path` (missing file is fine) plus `IPSCOPE__*`
/// environment variables. Only the first successful call takes effect.
///
/// # Examples
/// ```no_run
/// use ipscope::config::init_config;
/// init_config("config.toml").expect("invalid configuration");
/// ```
pub fn init_config(path: &str) -> Result<&'static AppConfig> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let loaded = AppConfig::load(path)?;
    Ok(CONFIG.get_or_init(|| loaded))
}
