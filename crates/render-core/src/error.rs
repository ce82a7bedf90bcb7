use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Failed to decode image: {0}")]
    ImageDecode(String),
    #[error("Invalid image data: {0}")]
    InvalidImage(String),
    #[error("Scene references unknown image '{0}'")]
    MissingImage(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::ImageDecode(err.to_string())
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
