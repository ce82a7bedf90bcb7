//! Fold-in-four A4 conference badges.
//!
//! A [`BadgeRequest`] is validated into a [`UserRecord`], laid out on a page
//! according to a [`BadgeTemplate`] and rendered to PDF by a
//! [`BadgeGenerator`]:
//!
//! ```no_run
//! use cnol_badge::{BadgeGenerator, UserRecord};
//!
//! # fn main() -> Result<(), cnol_badge::BadgeError> {
//! let generator = BadgeGenerator::builder().with_asset_dir("public").build()?;
//! let record = UserRecord::new(
//!     "Jean Barnard",
//!     "Opticien diplômé",
//!     "Casablanca",
//!     "jean.barnard@example.com",
//!     "cnol2025-jbarnard",
//! )?;
//! let pdf = generator.render(&record)?;
//! # Ok(())
//! # }
//! ```

pub mod compose;
pub mod error;
pub mod generator;
pub mod qr;
pub mod record;
pub mod template;

pub use compose::{BadgeAssets, compose_scene};
pub use error::{BadgeError, EncodingError, TemplateError, ValidationError};
pub use generator::{BadgeGenerator, BadgeGeneratorBuilder, DEFAULT_ASSET_DIR};
pub use qr::QrEncoder;
pub use record::{
    Badge, BadgeRequest, MAX_IDENTIFIER_LEN, UserRecord, badge_filename, is_filename_safe,
};
pub use template::BadgeTemplate;

pub use badge_render_core::{DocumentRenderer, Scene};
pub use badge_resource::{CachedAssetProvider, FilesystemAssetProvider, InMemoryAssetProvider};
pub use badge_traits::{AssetError, AssetProvider};
