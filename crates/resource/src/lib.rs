//! Asset providers for the badge renderer.
//!
//! This crate provides platform-specific implementations of the
//! `AssetProvider` trait from badge-traits.
//!
//! ## Available Providers
//!
//! - [`FilesystemAssetProvider`]: Loads assets from a directory on disk
//! - [`CachedAssetProvider`]: Memoizes the assets of another provider
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory provider from badge-traits:
//! - [`InMemoryAssetProvider`]: Pre-populated in-memory storage

mod cache;
mod filesystem;

pub use cache::CachedAssetProvider;
pub use filesystem::FilesystemAssetProvider;

pub use badge_traits::InMemoryAssetProvider;
