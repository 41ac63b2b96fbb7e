//! Pure layout arithmetic for the thumbnail poster.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! The grid is a left-to-right, top-to-bottom flow that wraps after
//! `columns` thumbnails. Each row is as tall as its tallest thumbnail; rows
//! do not line up with each other beyond that.

use super::params::LayoutParams;

/// Top-left corner of one thumbnail on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
}

/// Canvas size plus one placement per thumbnail, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterPlan {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
}

/// Canvas width: `columns * (thumbnail_width + margin) + margin`, saturating
/// at `u32::MAX`. Validated configs never get near it.
///
/// # Examples
/// ```
/// # use contest_thumbnailer::imaging::{LayoutParams, poster_width};
/// let params = LayoutParams { thumbnail_width: 160, columns: 5, margin: 10 };
/// assert_eq!(poster_width(&params), 860);
/// ```
pub fn poster_width(params: &LayoutParams) -> u32 {
    params
        .thumbnail_width
        .saturating_add(params.margin)
        .saturating_mul(params.columns)
        .saturating_add(params.margin)
}

/// Canvas height from the thumbnail heights, in order.
///
/// A leading margin, then each row's tallest thumbnail plus one margin, then a
/// trailing margin. A partial last row counts like a full one.
pub fn poster_height(heights: &[u32], params: &LayoutParams) -> u32 {
    let columns = params.columns.max(1) as usize;
    heights
        .chunks(columns)
        .map(|row| row.iter().copied().max().unwrap_or(0))
        .fold(params.margin, |total, tallest| {
            total.saturating_add(tallest).saturating_add(params.margin)
        })
        .saturating_add(params.margin)
}

/// Place every thumbnail, given its `(width, height)`.
///
/// The cursor starts at `(margin, margin)` and moves right by each
/// thumbnail's width plus the margin. After `columns` thumbnails it returns
/// to the left edge and drops by the row's tallest height plus the margin.
pub fn plan_layout(sizes: &[(u32, u32)], params: &LayoutParams) -> PosterPlan {
    let columns = params.columns.max(1);
    let heights: Vec<u32> = sizes.iter().map(|&(_, h)| h).collect();

    let mut placements = Vec::with_capacity(sizes.len());
    let (mut x, mut y) = (params.margin, params.margin);
    let mut row_tallest = 0;
    let mut in_row = 0;

    for &(w, h) in sizes {
        placements.push(Placement { x, y });
        row_tallest = row_tallest.max(h);
        x = x.saturating_add(w).saturating_add(params.margin);
        in_row += 1;

        if in_row == columns {
            x = params.margin;
            y = y.saturating_add(row_tallest).saturating_add(params.margin);
            row_tallest = 0;
            in_row = 0;
        }
    }

    PosterPlan {
        width: poster_width(params),
        height: poster_height(&heights, params),
        placements,
    }
}
