use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{IpscopeError, Result};

/// 环境变量前缀，分隔符为 `__`
pub const ENV_PREFIX: &str = "IPSCOPE";

/// 未指定 `--config` 时尝试加载的文件
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 静态配置（启动时加载一次）
///
/// - server: 监听地址、端口、worker 数量、路由
/// - geoip: 上游地理位置服务
/// - trivia: 冷知识随机源
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub geoip: GeoIpConfig,
    #[serde(default)]
    pub trivia: TriviaConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > TOML 文件 > 默认值
    /// 示例：IPSCOPE__SERVER__PORT=9999
    pub fn load(path: &str) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.geoip.api_url.contains("{ip}") {
            return Err(IpscopeError::config(format!(
                "geoip.api_url must contain an {{ip}} placeholder, got '{}'",
                self.geoip.api_url
            )));
        }
        if !self.server.route.starts_with('/') {
            return Err(IpscopeError::config(format!(
                "server.route must start with '/', got '{}'",
                self.server.route
            )));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
    /// 查询接口的路径
    #[serde(default = "default_route")]
    pub route: String,
}

/// 上游 GeoIP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoIpConfig {
    /// 使用 {ip} 作为占位符
    #[serde(default = "default_geoip_api_url")]
    pub api_url: String,
    /// 默认不设置超时
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// 冷知识随机源配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TriviaConfig {
    /// 固定种子后每次启动的挑选序列相同
    #[serde(default)]
    pub seed: Option<u64>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_route() -> String {
    "/api".to_string()
}

fn default_geoip_api_url() -> String {
    "http://ip-api.com/json/{ip}?fields=status,message,country,countryCode,regionName,city,zip,lat,lon,timezone,offset,dst,as,org,isp,reverse".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cpu_count: default_cpu_count(),
            route: default_route(),
        }
    }
}

impl Default for GeoIpConfig {
    fn default() -> Self {
        Self {
            api_url: default_geoip_api_url(),
            timeout_secs: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
