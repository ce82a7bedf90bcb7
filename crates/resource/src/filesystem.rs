//! Filesystem-based asset provider.
//!
//! Assets are read from a base directory on every call, so replacing an
//! image on disk takes effect on the next render. Names that would escape
//! the base directory (`../secret`, absolute paths) are rejected.

use badge_traits::{AssetError, AssetProvider, SharedAssetData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// An asset provider that loads assets from a directory on disk.
///
/// The badge service points this at the `public` directory, relative to
/// the process working directory.
#[derive(Debug)]
pub struct FilesystemAssetProvider {
    base_path: PathBuf,
    /// Canonicalized base path for containment checks
    canonical_base: Option<PathBuf>,
}

impl FilesystemAssetProvider {
    /// Creates a provider rooted at `base_path`.
    ///
    /// The directory does not need to exist yet; missing assets surface as
    /// `AssetError::NotFound` at load time.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    /// Resolves an asset name relative to the base path.
    ///
    /// Returns `None` if the name would escape the base directory.
    fn resolve_path_safe(&self, name: &str) -> Option<PathBuf> {
        if Path::new(name).is_absolute() {
            return None;
        }

        if Path::new(name)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }

        let full_path = self.base_path.join(name);

        // Symlinks may still point outside the base directory.
        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            return canonical.starts_with(base).then_some(canonical);
        }

        Some(full_path)
    }
}

impl AssetProvider for FilesystemAssetProvider {
    fn load(&self, name: &str) -> Result<SharedAssetData, AssetError> {
        let full_path = self
            .resolve_path_safe(name)
            .ok_or_else(|| AssetError::NotFound(format!("{} (outside asset directory)", name)))?;

        log::debug!("Reading asset '{}' from {}", name, full_path.display());

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound(name.to_string())
            } else {
                AssetError::LoadFailed {
                    name: name.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve_path_safe(name)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemAssetProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_filesystem_provider_load_existing_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("logo-cnol.png"), b"logo").unwrap();

        let provider = FilesystemAssetProvider::new(dir.path());
        let data = provider.load("logo-cnol.png").unwrap();
        assert_eq!(&*data, b"logo");
    }

    #[test]
    fn test_filesystem_provider_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemAssetProvider::new(dir.path());

        let result = provider.load("cnol2025-poster.jpg");
        assert_eq!(
            result,
            Err(AssetError::NotFound("cnol2025-poster.jpg".to_string()))
        );
    }

    #[test]
    fn test_filesystem_provider_missing_base_directory() {
        let dir = tempdir().unwrap();
        let provider = FilesystemAssetProvider::new(dir.path().join("public"));

        assert!(!provider.exists("logo-cnol.png"));
        assert!(matches!(
            provider.load("logo-cnol.png"),
            Err(AssetError::NotFound(_))
        ));
    }

    #[test]
    fn test_filesystem_provider_exists_only_for_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("logo-cnol.png"), b"").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let provider = FilesystemAssetProvider::new(dir.path());
        assert!(provider.exists("logo-cnol.png"));
        assert!(!provider.exists("nested"));
        assert!(!provider.exists("missing.png"));
    }

    #[test]
    fn test_filesystem_provider_blocks_traversal() {
        let dir = tempdir().unwrap();
        let provider = FilesystemAssetProvider::new(dir.path());

        assert!(provider.load("../../../etc/passwd").is_err());
        assert!(provider.load("/etc/passwd").is_err());
        assert!(!provider.exists(".."));
        assert!(!provider.exists("images/../../secret"));
    }

    #[test]
    fn test_filesystem_provider_allows_nested_paths() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images").join("poster.jpg"), b"jpeg").unwrap();

        let provider = FilesystemAssetProvider::new(dir.path());
        assert_eq!(&*provider.load("images/poster.jpg").unwrap(), b"jpeg");
    }
}
