// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Row layout

use super::{
    ChildHint, CornerList, DEFAULT_SPACING, Layout, Rects, gap_after, run_corners, scale_len,
};
use crate::cast::{Cast, Conv};
use crate::geom::Rectangle;
use crate::theme::Corners;

/// Children side by side, sharing the width equally
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowLayout {
    pub align: bool,
    /// Horizontal space between children, in unscaled pixels
    pub spacing: i32,
}

impl RowLayout {
    /// Construct with default spacing
    pub fn new(align: bool) -> Self {
        RowLayout {
            align,
            spacing: DEFAULT_SPACING,
        }
    }
}

impl Default for RowLayout {
    fn default() -> Self {
        RowLayout::new(false)
    }
}

impl Layout for RowLayout {
    fn is_aligned(&self) -> bool {
        self.align
    }

    fn height(&self, children: &[ChildHint], _: f32) -> i32 {
        children.iter().map(|c| c.height).max().unwrap_or(0)
    }

    fn arrange(&self, area: Rectangle, children: &[ChildHint], scale: f32) -> Rects {
        let n = children.len();
        if n == 0 {
            return Rects::new();
        }

        let spacing = scale_len(self.spacing, scale);
        let gaps: i32 = (0..n)
            .map(|i| gap_after(self.align, children, i, spacing))
            .sum();
        let available = (area.width() - gaps).max(0);
        let count: i32 = n.cast();
        let (base, extra) = (available / count, available % count);

        let mut x = area.xmin;
        (0..n)
            .map(|i| {
                let width = base + i32::from(i32::conv(i) < extra);
                let rect = Rectangle::from_size(x, width, area.ymin, children[i].height);
                x = rect.xmax + gap_after(self.align, children, i, spacing);
                rect
            })
            .collect()
    }

    fn align_corners(&self, children: &[ChildHint]) -> CornerList {
        run_corners(self.align, children, Corners::LEFT, Corners::RIGHT)
    }
}
