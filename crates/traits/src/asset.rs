//! AssetProvider trait for abstracting access to the static badge images.
//!
//! The renderer asks for assets by name (for example `logo-cnol.png`) and
//! never touches the filesystem directly, so tests can substitute
//! pre-populated in-memory assets.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for asset loading operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset '{name}': {message}")]
    LoadFailed { name: String, message: String },

    #[error("Invalid asset format for '{name}': {message}")]
    InvalidFormat { name: String, message: String },
}

impl AssetError {
    /// The asset name this error refers to.
    pub fn asset_name(&self) -> &str {
        match self {
            AssetError::NotFound(name) => name,
            AssetError::LoadFailed { name, .. } | AssetError::InvalidFormat { name, .. } => name,
        }
    }
}

/// Shared asset data type (reference-counted bytes).
pub type SharedAssetData = Arc<Vec<u8>>;

/// A source of immutable binary assets, looked up by name.
///
/// Implementations must be safe for concurrent reads; the badge generator
/// shares a single provider across all render calls.
///
/// # Implementations
///
/// - `InMemoryAssetProvider`: pre-populated memory (always available)
/// - `FilesystemAssetProvider` (badge-resource): files under a base directory
/// - `CachedAssetProvider` (badge-resource): memoizes another provider
pub trait AssetProvider: Send + Sync + Debug {
    /// Load an asset by name.
    fn load(&self, name: &str) -> Result<SharedAssetData, AssetError>;

    /// Check if an asset exists.
    fn exists(&self, name: &str) -> bool;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

impl<P: AssetProvider + ?Sized> AssetProvider for Arc<P> {
    fn load(&self, name: &str) -> Result<SharedAssetData, AssetError> {
        (**self).load(name)
    }

    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// An in-memory asset provider.
///
/// Assets must be added before use. This is the provider used by tests and
/// by callers that embed their images in the binary.
#[derive(Debug, Default)]
pub struct InMemoryAssetProvider {
    assets: RwLock<HashMap<String, SharedAssetData>>,
}

impl InMemoryAssetProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset to the in-memory store, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, name: impl Into<String>, data: Vec<u8>) -> Result<(), AssetError> {
        self.add_shared(name, Arc::new(data))
    }

    /// Add an asset from shared data.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::LoadFailed` if the internal lock is poisoned.
    pub fn add_shared(
        &self,
        name: impl Into<String>,
        data: SharedAssetData,
    ) -> Result<(), AssetError> {
        let name = name.into();
        let mut assets = self.assets.write().map_err(|_| AssetError::LoadFailed {
            name: name.clone(),
            message: "asset store lock poisoned".to_string(),
        })?;
        assets.insert(name, data);
        Ok(())
    }

    /// Builder-style variant of [`add`](Self::add).
    ///
    /// # Errors
    ///
    /// Returns `AssetError::LoadFailed` if the internal lock is poisoned.
    pub fn with_asset(self, name: impl Into<String>, data: Vec<u8>) -> Result<Self, AssetError> {
        self.add(name, data)?;
        Ok(self)
    }

    /// Remove an asset from the store.
    ///
    /// Returns `None` if the lock is poisoned or the asset doesn't exist.
    pub fn remove(&self, name: &str) -> Option<SharedAssetData> {
        self.assets.write().ok()?.remove(name)
    }

    /// Get the number of assets in the store.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.assets.read().map(|a| a.len()).unwrap_or(0)
    }

    /// Check if the store is empty.
    ///
    /// Returns `true` if the lock is poisoned.
    pub fn is_empty(&self) -> bool {
        self.assets.read().map(|a| a.is_empty()).unwrap_or(true)
    }
}

impl AssetProvider for InMemoryAssetProvider {
    fn load(&self, name: &str) -> Result<SharedAssetData, AssetError> {
        let assets = self.assets.read().map_err(|_| AssetError::LoadFailed {
            name: name.to_string(),
            message: "asset store lock poisoned".to_string(),
        })?;
        assets
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }

    fn exists(&self, name: &str) -> bool {
        self.assets
            .read()
            .map(|a| a.contains_key(name))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryAssetProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_provider_add_and_load() {
        let provider = InMemoryAssetProvider::new();
        provider.add("logo.png", b"PNG bytes".to_vec()).unwrap();

        let data = provider.load("logo.png").unwrap();
        assert_eq!(&*data, b"PNG bytes");
    }

    #[test]
    fn test_in_memory_provider_not_found() {
        let provider = InMemoryAssetProvider::new();
        let result = provider.load("poster.jpg");
        assert_eq!(result, Err(AssetError::NotFound("poster.jpg".to_string())));
    }

    #[test]
    fn test_in_memory_provider_exists_and_remove() {
        let provider = InMemoryAssetProvider::new()
            .with_asset("logo.png", vec![1, 2, 3])
            .unwrap();

        assert!(provider.exists("logo.png"));
        assert!(!provider.exists("poster.jpg"));

        let removed = provider.remove("logo.png").unwrap();
        assert_eq!(&*removed, &[1, 2, 3]);
        assert!(provider.is_empty());
        assert!(provider.remove("logo.png").is_none());
    }

    #[test]
    fn test_in_memory_provider_overwrite() {
        let provider = InMemoryAssetProvider::new();
        provider.add("logo.png", b"original".to_vec()).unwrap();
        provider.add("logo.png", b"updated".to_vec()).unwrap();

        assert_eq!(&*provider.load("logo.png").unwrap(), b"updated");
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_in_memory_provider_shares_data() {
        let provider = InMemoryAssetProvider::new();
        let shared = Arc::new(vec![9u8; 16]);
        provider.add_shared("poster.jpg", shared.clone()).unwrap();

        let loaded = provider.load("poster.jpg").unwrap();
        assert!(Arc::ptr_eq(&loaded, &shared));
    }

    #[test]
    fn test_arc_provider_delegates() {
        let provider: Arc<dyn AssetProvider> =
            Arc::new(InMemoryAssetProvider::new().with_asset("a", vec![]).unwrap());
        assert!(provider.exists("a"));
        assert_eq!(provider.name(), "InMemoryAssetProvider");
    }

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::NotFound("logo.png".to_string());
        assert!(err.to_string().contains("logo.png"));

        let err = AssetError::InvalidFormat {
            name: "poster.jpg".to_string(),
            message: "truncated JPEG".to_string(),
        };
        assert!(err.to_string().contains("poster.jpg"));
        assert!(err.to_string().contains("truncated JPEG"));
        assert_eq!(err.asset_name(), "poster.jpg");
    }
}
