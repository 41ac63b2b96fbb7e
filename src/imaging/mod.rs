//! Thumbnail acquisition and poster rendering.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Fetch** | `reqwest` blocking GET through the resize proxy |
//! | **Buffer** | `tempfile::SpooledTempFile` |
//! | **Decode** | `image::ImageReader` with format sniffing |
//! | **Paste** | `image::imageops::replace` |
//! | **Captions** | `imageproc::drawing::draw_text_mut` + `ab_glyph` |
//! | **Encode** | PNG via `image` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for the grid arithmetic (unit testable)
//! - **Parameters**: Data structures describing the layout and colours
//! - **Source**: [`ImageSource`] trait + [`HttpImageSource`]
//! - **Poster**: Painting a planned layout onto a canvas

mod calculations;
pub mod http_source;
mod params;
pub mod poster;
pub mod source;

pub use calculations::{Placement, PosterPlan, plan_layout, poster_height, poster_width};
pub use http_source::HttpImageSource;
pub use params::{CaptionColors, LayoutParams, background_from_config};
pub use poster::{CaptionStyle, PosterTile, render_poster, write_poster};
pub use source::{ImageError, ImageSource};
