//! Image source backed by an HTTP resize proxy.
//!
//! The proxy understands `<proxy>/<width>x0/<original url>` and answers with
//! the original scaled to `width`, height following the aspect ratio. The
//! body is spooled into a [`SpooledTempFile`] (memory first, disk past the
//! spool limit) and decoded from there; the buffer is dropped as soon as
//! decoding finishes, successful or not. A rendition wider than requested is
//! scaled down to the requested width.

use super::source::{ImageError, ImageSource};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use reqwest::blocking::Client;
use std::io::{BufReader, Read, Seek};
use tempfile::SpooledTempFile;

/// Payloads above this many bytes are spooled to disk.
const DEFAULT_SPOOL_LIMIT: usize = 4 * 1024 * 1024;

pub struct HttpImageSource {
    http: Client,
    proxy: String,
    spool_limit: usize,
}

impl HttpImageSource {
    pub fn new(proxy: impl Into<String>) -> Result<Self, ImageError> {
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self {
            http,
            proxy: proxy.into().trim_end_matches('/').to_string(),
            spool_limit: DEFAULT_SPOOL_LIMIT,
        })
    }

    /// Proxy link for a `width`-wide rendition of `image_url`.
    pub fn rendition_url(&self, image_url: &str, width: u32) -> String {
        format!("{}/{}x0/{}", self.proxy, width, image_url)
    }
}

impl ImageSource for HttpImageSource {
    fn acquire(&self, image_url: &str, target_width: u32) -> Result<DynamicImage, ImageError> {
        let url = self.rendition_url(image_url, target_width);
        tracing::debug!(%url, "fetching thumbnail");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status(status.as_u16()));
        }

        let image = decode_payload(response, self.spool_limit)?;
        Ok(fit_width(image, target_width))
    }
}

/// Spool `body` and decode it, sniffing the format from its first bytes.
pub(crate) fn decode_payload(
    mut body: impl Read,
    spool_limit: usize,
) -> Result<DynamicImage, ImageError> {
    let mut spool = SpooledTempFile::new(spool_limit);
    std::io::copy(&mut body, &mut spool)?;
    spool.rewind()?;

    let image = ImageReader::new(BufReader::new(spool))
        .with_guessed_format()?
        .decode()?;
    Ok(image)
}

/// Scale `image` down to `target_width`, keeping the aspect ratio. Narrower
/// images are returned as they are.
pub(crate) fn fit_width(image: DynamicImage, target_width: u32) -> DynamicImage {
    if target_width == 0 || image.width() <= target_width {
        return image;
    }
    image.resize(target_width, u32::MAX, FilterType::Lanczos3)
}
