//! Image source trait and shared error type.
//!
//! The [`ImageSource`] trait is the one operation the poster needs from the
//! outside world: turn an image link into a decoded bitmap roughly
//! `target_width` pixels wide. The production implementation is
//! [`HttpImageSource`](super::http_source::HttpImageSource), which asks a
//! resize proxy for the rendition.

use image::DynamicImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Image request returned status {0}")]
    Status(u16),
    #[error("Decode error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Font error: {0}")]
    Font(String),
}

/// Anything that can hand back a decoded, width-constrained image.
pub trait ImageSource {
    /// Fetch `image_url` scaled to `target_width` pixels wide, height following
    /// the aspect ratio.
    fn acquire(&self, image_url: &str, target_width: u32) -> Result<DynamicImage, ImageError>;
}
