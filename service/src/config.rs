use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub concurrency: ConcurrencyConfig,
    pub assets: AssetsConfig,
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_size_kb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConcurrencyConfig {
    pub max_sync_requests: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    pub dir: PathBuf,
    pub cache: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Emit one JSON object per log line instead of human-readable text
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                max_request_size_kb: 64,
            },
            concurrency: ConcurrencyConfig {
                max_sync_requests: 8,
            },
            assets: AssetsConfig {
                dir: PathBuf::from(cnol_badge::DEFAULT_ASSET_DIR),
                cache: true,
            },
            template: TemplateConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        // Try multiple config file locations in order of preference
        let config_candidates = [
            // 1. Current directory (when running from service/)
            "config/default",
            // 2. Workspace root
            "service/config/default",
        ];

        let defaults = Config::default();
        let mut builder = config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default(
                "server.max_request_size_kb",
                defaults.server.max_request_size_kb as i64,
            )?
            .set_default(
                "concurrency.max_sync_requests",
                defaults.concurrency.max_sync_requests as i64,
            )?
            .set_default("assets.dir", defaults.assets.dir.to_string_lossy().to_string())?
            .set_default("assets.cache", defaults.assets.cache)?
            .set_default("logging.json", false)?;

        let override_path = std::env::var("BADGE_SERVICE_CONFIG")
            .ok()
            .filter(|p| !p.is_empty());

        if let Some(config_path) = override_path {
            // An explicit override must exist
            builder = builder.add_source(config::File::with_name(&config_path));
        } else if let Some(path) = config_candidates
            .iter()
            .find(|p| Path::new(&format!("{}.toml", p)).exists())
        {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Always layer environment variables on top
        builder =
            builder.add_source(config::Environment::with_prefix("BADGE_SERVICE").separator("__"));

        builder.build()?.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn max_request_bytes(&self) -> usize {
        self.server.max_request_size_kb * 1024
    }
}
