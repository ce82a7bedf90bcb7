use badge_traits::{AssetError, AssetProvider, SharedAssetData};
use std::collections::HashMap;
use std::sync::RwLock;

/// Wraps another provider and keeps every successfully loaded asset in
/// memory for the lifetime of the process.
///
/// Badge assets are immutable once deployed, so the first read of each name
/// is the only one that reaches the inner provider. Failed loads are not
/// cached and will be retried on the next call.
#[derive(Debug)]
pub struct CachedAssetProvider<P> {
    inner: P,
    cache: RwLock<HashMap<String, SharedAssetData>>,
}

impl<P: AssetProvider> CachedAssetProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Number of assets currently held in memory.
    pub fn cached_len(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }
}

impl<P: AssetProvider> AssetProvider for CachedAssetProvider<P> {
    fn load(&self, name: &str) -> Result<SharedAssetData, AssetError> {
        if let Ok(cache) = self.cache.read()
            && let Some(data) = cache.get(name)
        {
            return Ok(data.clone());
        }

        let data = self.inner.load(name)?;
        match self.cache.write() {
            Ok(mut cache) => {
                log::debug!("Caching asset '{}' ({} bytes)", name, data.len());
                cache.entry(name.to_string()).or_insert_with(|| data.clone());
            }
            Err(_) => log::warn!("Asset cache lock poisoned; serving '{}' uncached", name),
        }
        Ok(data)
    }

    fn exists(&self, name: &str) -> bool {
        let cached = self
            .cache
            .read()
            .map(|c| c.contains_key(name))
            .unwrap_or(false);
        cached || self.inner.exists(name)
    }

    fn name(&self) -> &'static str {
        "CachedAssetProvider"
    }
}
