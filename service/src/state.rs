use crate::config::Config;
use cnol_badge::{BadgeError, BadgeGenerator};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Shared application state accessible to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Renders badges; holds the template and asset provider
    pub generator: Arc<BadgeGenerator>,

    /// Limits concurrent badge rendering on the blocking pool
    pub render_semaphore: Arc<Semaphore>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(generator: BadgeGenerator, config: Config) -> Self {
        let render_semaphore = Arc::new(Semaphore::new(config.concurrency.max_sync_requests.max(1)));

        Self {
            generator: Arc::new(generator),
            render_semaphore,
            config: Arc::new(config),
        }
    }

    /// Builds the generator described by `config`.
    pub fn from_config(config: Config) -> Result<Self, BadgeError> {
        let mut builder = BadgeGenerator::builder()
            .with_asset_dir(&config.assets.dir)
            .cache_assets(config.assets.cache);
        if let Some(path) = &config.template.path {
            builder = builder.with_template_file(path)?;
        }
        Ok(Self::new(builder.build()?, config))
    }
}
