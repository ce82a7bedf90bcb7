use crate::compose::{BadgeAssets, compose_scene};
use crate::error::BadgeError;
use crate::qr::QrEncoder;
use crate::record::{Badge, BadgeRequest, UserRecord};
use crate::template::BadgeTemplate;
use badge_render_core::{DocumentRenderer, RasterImage, Scene};
use badge_render_lopdf::LopdfRenderer;
use badge_resource::{CachedAssetProvider, FilesystemAssetProvider};
use badge_traits::{AssetError, AssetProvider};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Directory assets are read from when none is configured.
pub const DEFAULT_ASSET_DIR: &str = "public";

/// Renders badges from validated records.
///
/// A generator holds no per-render state and is shared between threads
/// behind an `Arc`.
pub struct BadgeGenerator {
    template: Arc<BadgeTemplate>,
    assets: Arc<dyn AssetProvider>,
    renderer: Arc<dyn DocumentRenderer>,
    qr: QrEncoder,
}

impl std::fmt::Debug for BadgeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BadgeGenerator")
            .field("assets", &self.assets.name())
            .field("qr", &self.qr)
            .finish_non_exhaustive()
    }
}

impl BadgeGenerator {
    pub fn builder() -> BadgeGeneratorBuilder {
        BadgeGeneratorBuilder::new()
    }

    pub fn template(&self) -> &BadgeTemplate {
        &self.template
    }

    fn load_image(&self, name: &str) -> Result<RasterImage, AssetError> {
        let bytes = self.assets.load(name)?;
        RasterImage::decode(&bytes).map_err(|e| AssetError::InvalidFormat {
            name: name.to_string(),
            message: e.to_string(),
        })
    }

    /// Loads the static images, encodes the QR code and lays out the page.
    pub fn compose(&self, record: &UserRecord) -> Result<Scene, BadgeError> {
        let names = &self.template.assets;
        let assets = BadgeAssets {
            logo: self.load_image(&names.logo)?,
            poster: self.load_image(&names.poster)?,
            qr: self.qr.encode(record.identifier())?,
        };
        Ok(compose_scene(&self.template, record, assets))
    }

    /// Renders the badge document for `record`.
    ///
    /// Failures are logged here, with the identifier, before being returned.
    pub fn render(&self, record: &UserRecord) -> Result<Vec<u8>, BadgeError> {
        let result = self
            .compose(record)
            .and_then(|scene| self.renderer.render(&scene).map_err(BadgeError::from));
        match &result {
            Ok(bytes) => log::info!(
                "Generated badge for '{}' ({} bytes)",
                record.identifier(),
                bytes.len()
            ),
            Err(e) => log::error!("Badge generation failed for '{}': {}", record.identifier(), e),
        }
        result
    }

    /// Validates `request` and renders it. Nothing is loaded when
    /// validation fails.
    pub fn generate(&self, request: BadgeRequest) -> Result<Badge, BadgeError> {
        let record = UserRecord::try_from(request).inspect_err(|e| {
            log::warn!("Rejected badge request: {}", e);
        })?;
        let bytes = self.render(&record)?;
        Ok(Badge {
            filename: record.filename(),
            bytes,
        })
    }

    pub fn content_type(&self) -> &'static str {
        self.renderer.content_type()
    }
}

/// A builder for creating a [`BadgeGenerator`].
#[derive(Default)]
pub struct BadgeGeneratorBuilder {
    template: Option<BadgeTemplate>,
    asset_dir: Option<PathBuf>,
    asset_provider: Option<Arc<dyn AssetProvider>>,
    renderer: Option<Arc<dyn DocumentRenderer>>,
    cache_assets: bool,
}

impl BadgeGeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `template` instead of the built-in CNOL 2025 template.
    pub fn with_template(mut self, template: BadgeTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Loads the template from a JSON file.
    pub fn with_template_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, BadgeError> {
        self.template = Some(BadgeTemplate::from_file(path)?);
        Ok(self)
    }

    /// Reads assets from `dir`. Ignored when an explicit provider is set.
    pub fn with_asset_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.asset_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn with_asset_provider<A: AssetProvider + 'static>(mut self, provider: A) -> Self {
        self.asset_provider = Some(Arc::new(provider));
        self
    }

    pub fn with_renderer<R: DocumentRenderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Keeps asset bytes in memory after the first load.
    pub fn cache_assets(mut self, cache: bool) -> Self {
        self.cache_assets = cache;
        self
    }

    /// Validates the template and assembles the generator.
    pub fn build(self) -> Result<BadgeGenerator, BadgeError> {
        let template = self.template.unwrap_or_default();
        template.validate()?;

        let provider: Arc<dyn AssetProvider> = match self.asset_provider {
            Some(provider) => provider,
            None => {
                let dir = self
                    .asset_dir
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR));
                log::info!("Reading badge assets from {}", dir.display());
                Arc::new(FilesystemAssetProvider::new(dir))
            }
        };
        let assets: Arc<dyn AssetProvider> = if self.cache_assets {
            Arc::new(CachedAssetProvider::new(provider))
        } else {
            provider
        };

        Ok(BadgeGenerator {
            qr: QrEncoder::from_layout(&template.layout.qr),
            template: Arc::new(template),
            assets,
            renderer: self
                .renderer
                .unwrap_or_else(|| Arc::new(LopdfRenderer::new())),
        })
    }
}
