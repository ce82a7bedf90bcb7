use crate::error::RenderError;
use crate::scene::Scene;

/// A backend that serializes a composed [`Scene`] into a complete document.
///
/// Implementations must be deterministic: the same scene always yields the
/// same bytes.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, scene: &Scene) -> Result<Vec<u8>, RenderError>;

    /// MIME type of the produced document.
    fn content_type(&self) -> &'static str;
}
