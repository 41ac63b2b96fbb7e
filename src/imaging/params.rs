//! Parameter types for poster rendering.
//!
//! These structs describe *what* the poster looks like, not how it is drawn.
//! [`LayoutParams`] drives the pure layout arithmetic in
//! [`calculations`](super::calculations); [`CaptionColors`] and the canvas
//! background are only read when pixels are actually painted.

use crate::config::PosterConfig;
use image::Rgba;

/// Grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    /// Width every thumbnail is requested at.
    pub thumbnail_width: u32,
    /// Thumbnails per row. Always at least 1.
    pub columns: u32,
    /// Gap around the grid and between cells.
    pub margin: u32,
}

impl LayoutParams {
    pub fn from_config(config: &PosterConfig) -> Self {
        Self {
            thumbnail_width: config.thumbnail_width,
            columns: config.columns.max(1),
            margin: config.margin,
        }
    }
}

/// Caption label and outline colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionColors {
    pub label: Rgba<u8>,
    pub shadow: Rgba<u8>,
}

impl CaptionColors {
    pub fn from_config(config: &PosterConfig) -> Self {
        let [r, g, b] = config.label_color;
        let [sr, sg, sb] = config.shadow_color;
        Self {
            label: Rgba([r, g, b, 255]),
            shadow: Rgba([sr, sg, sb, 255]),
        }
    }
}

/// Canvas fill colour.
pub fn background_from_config(config: &PosterConfig) -> Rgba<u8> {
    Rgba(config.background)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_from_default_config() {
        let params = LayoutParams::from_config(&PosterConfig::default());
        assert_eq!(
            params,
            LayoutParams {
                thumbnail_width: 160,
                columns: 20,
                margin: 10
            }
        );
    }

    #[test]
    fn zero_columns_is_clamped() {
        let config = PosterConfig {
            columns: 0,
            ..PosterConfig::default()
        };
        assert_eq!(LayoutParams::from_config(&config).columns, 1);
    }

    #[test]
    fn caption_colors_are_opaque() {
        let colors = CaptionColors::from_config(&PosterConfig::default());
        assert_eq!(colors.label, Rgba([255, 255, 255, 255]));
        assert_eq!(colors.shadow, Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn default_background_is_transparent() {
        assert_eq!(background_from_config(&PosterConfig::default())[3], 0);
    }
}
