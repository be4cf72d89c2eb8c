// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Column layout

use super::{
    ChildHint, CornerList, DEFAULT_SPACING, Layout, Rects, gap_after, run_corners, scale_len,
};
use crate::geom::Rectangle;
use crate::theme::Corners;

/// Children stacked vertically, each taking the full width
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    pub align: bool,
    /// Vertical space between children, in unscaled pixels
    pub spacing: i32,
}

impl ColumnLayout {
    /// Construct with default spacing
    pub fn new(align: bool) -> Self {
        ColumnLayout {
            align,
            spacing: DEFAULT_SPACING,
        }
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        ColumnLayout::new(false)
    }
}

impl Layout for ColumnLayout {
    fn is_aligned(&self) -> bool {
        self.align
    }

    fn height(&self, children: &[ChildHint], scale: f32) -> i32 {
        let spacing = scale_len(self.spacing, scale);
        (0..children.len())
            .map(|i| children[i].height + gap_after(self.align, children, i, spacing))
            .sum()
    }

    fn arrange(&self, area: Rectangle, children: &[ChildHint], scale: f32) -> Rects {
        let spacing = scale_len(self.spacing, scale);
        let mut y = area.ymin;
        (0..children.len())
            .map(|i| {
                let rect = Rectangle::from_size(area.xmin, area.width(), y, children[i].height);
                y = rect.ymax + gap_after(self.align, children, i, spacing);
                rect
            })
            .collect()
    }

    fn align_corners(&self, children: &[ChildHint]) -> CornerList {
        run_corners(self.align, children, Corners::TOP, Corners::BOTTOM)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stacks_with_spacing() {
        let layout = ColumnLayout::new(false);
        let children = [ChildHint::new(20, true), ChildHint::new(10, false)];
        assert_eq!(layout.height(&children, 1.0), 34);

        let rects = layout.arrange(Rectangle::new(5, 105, 0, 100), &children, 1.0);
        assert_eq!(rects[0], Rectangle::new(5, 105, 0, 20));
        assert_eq!(rects[1], Rectangle::new(5, 105, 24, 34));

        assert_eq!(layout.height(&children, 2.0), 38);
    }

    #[test]
    fn aligned_runs_touch() {
        let layout = ColumnLayout::new(true);
        let children = [
            ChildHint::new(20, true),
            ChildHint::new(20, true),
            ChildHint::new(20, true),
            ChildHint::new(20, false),
        ];
        let rects = layout.arrange(Rectangle::new(0, 50, 0, 200), &children, 1.0);
        assert_eq!(rects[1].ymin, rects[0].ymax);
        assert_eq!(rects[2].ymin, rects[1].ymax);
        assert_eq!(rects[3].ymin, rects[2].ymax + DEFAULT_SPACING);

        let corners = layout.align_corners(&children);
        assert_eq!(
            corners.as_slice(),
            &[
                Some(Corners::TOP),
                Some(Corners::empty()),
                Some(Corners::BOTTOM),
                None,
            ]
        );
    }
}
