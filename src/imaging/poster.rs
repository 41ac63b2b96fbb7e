//! Poster realization: paint thumbnails and captions onto one canvas.
//!
//! Placement comes from [`plan_layout`]; this module only does pixels. Each
//! thumbnail is pasted (replacing, not blending, the canvas under it) and its
//! caption is drawn twice, first in the shadow colour one pixel down-right,
//! then in the label colour, which keeps it legible on any background.

use super::calculations::plan_layout;
use super::params::{CaptionColors, LayoutParams};
use super::source::ImageError;
use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage, imageops};
use imageproc::drawing::draw_text_mut;
use std::path::Path;

/// One thumbnail to paint, with the text to put on it.
pub struct PosterTile<'a> {
    pub image: &'a DynamicImage,
    pub caption: &'a str,
}

/// Loaded caption font plus size and colours.
pub struct CaptionStyle {
    font: FontVec,
    scale: PxScale,
    colors: CaptionColors,
}

impl CaptionStyle {
    /// Read a TrueType/OpenType font from disk.
    pub fn load(path: &Path, size: f32, colors: CaptionColors) -> Result<Self, ImageError> {
        let data = std::fs::read(path)?;
        let font = FontVec::try_from_vec(data)
            .map_err(|e| ImageError::Font(format!("{}: {e}", path.display())))?;
        Ok(Self {
            font,
            scale: PxScale::from(size),
            colors,
        })
    }

    fn draw(&self, canvas: &mut RgbaImage, x: u32, y: u32, text: &str) {
        let (x, y) = (x as i32, y as i32);
        draw_text_mut(canvas, self.colors.shadow, x + 3, y + 3, self.scale, &self.font, text);
        draw_text_mut(canvas, self.colors.label, x + 2, y + 2, self.scale, &self.font, text);
    }
}

/// Paint `tiles` onto a fresh canvas filled with `background`.
///
/// Captions are skipped when `captions` is `None`.
pub fn render_poster(
    tiles: &[PosterTile<'_>],
    params: &LayoutParams,
    background: Rgba<u8>,
    captions: Option<&CaptionStyle>,
) -> RgbaImage {
    let sizes: Vec<(u32, u32)> = tiles.iter().map(|t| t.image.dimensions()).collect();
    let plan = plan_layout(&sizes, params);

    let mut canvas = RgbaImage::from_pixel(plan.width, plan.height, background);
    for (tile, spot) in tiles.iter().zip(&plan.placements) {
        let pixels = tile.image.to_rgba8();
        imageops::replace(&mut canvas, &pixels, i64::from(spot.x), i64::from(spot.y));
        if let Some(style) = captions {
            style.draw(&mut canvas, spot.x, spot.y, tile.caption);
        }
    }
    canvas
}

/// Write the canvas as PNG.
pub fn write_poster(canvas: &RgbaImage, path: &Path) -> Result<(), ImageError> {
    canvas.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
