use badge_render_core::RenderError;
use badge_traits::AssetError;
use std::path::PathBuf;
use thiserror::Error;

/// A request that cannot become a [`UserRecord`](crate::UserRecord).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field '{field}' exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Failures of the barcode or document encoders.
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("QR code encoding failed: {0}")]
    Qr(String),

    #[error("Document rendering failed: {0}")]
    Render(#[from] RenderError),
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read template '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse template: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid template: {0}")]
    Invalid(String),
}

/// The error type of badge generation.
#[derive(Error, Debug)]
pub enum BadgeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to load asset: {0}")]
    AssetLoad(#[from] AssetError),

    #[error("Encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl BadgeError {
    /// True when the failure was caused by the caller's input rather than
    /// by the deployment.
    pub fn is_client_error(&self) -> bool {
        matches!(self, BadgeError::Validation(_))
    }
}

impl From<RenderError> for BadgeError {
    fn from(err: RenderError) -> Self {
        BadgeError::Encoding(EncodingError::Render(err))
    }
}
