// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Layout strategies
//!
//! A [`Layout`] arranges the children of a layout node inside an area. Sizes
//! are in physical pixels: callers scale size hints before passing them in,
//! and pass the scale factor so that spacing can be scaled too.
//!
//! Layouts constructed with `align = true` join neighbouring children which
//! [can align](crate::Widget::can_align): no spacing is left between them and
//! only the outer corners of the joined run stay rounded.

mod column;
mod row;

pub use column::ColumnLayout;
pub use row::RowLayout;

use crate::cast::{CastFloat, Conv};
use crate::geom::Rectangle;
use crate::theme::Corners;
use smallvec::SmallVec;
use std::fmt::Debug;

/// Default spacing between children, in unscaled pixels
pub const DEFAULT_SPACING: i32 = 4;

/// Layout input for one child
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChildHint {
    /// Required height in physical pixels
    pub height: i32,
    /// Whether the child may join aligned neighbours
    pub can_align: bool,
}

impl ChildHint {
    /// Construct
    pub fn new(height: i32, can_align: bool) -> Self {
        ChildHint { height, can_align }
    }
}

/// Output rectangles, one per child
pub type Rects = SmallVec<[Rectangle; 8]>;

/// Corner assignments, one per child: `None` leaves corners unchanged
pub type CornerList = SmallVec<[Option<Corners>; 8]>;

/// The layout capability
pub trait Layout: Debug {
    /// Whether neighbouring alignable children are joined
    fn is_aligned(&self) -> bool;

    /// Height required by `children`
    fn height(&self, children: &[ChildHint], scale: f32) -> i32;

    /// Arrange `children` in `area`
    ///
    /// Returns one rectangle per child, in order.
    fn arrange(&self, area: Rectangle, children: &[ChildHint], scale: f32) -> Rects;

    /// Rounded corners for aligned children
    ///
    /// The default implementation assigns nothing.
    fn align_corners(&self, children: &[ChildHint]) -> CornerList {
        children.iter().map(|_| None).collect()
    }
}

/// Scale a length in unscaled pixels
pub(crate) fn scale_len(len: i32, scale: f32) -> i32 {
    (f32::conv(len) * scale).cast_nearest()
}

/// True if children `i` and `i + 1` are joined
pub(crate) fn joined(aligned: bool, children: &[ChildHint], i: usize) -> bool {
    aligned
        && children[i].can_align
        && children.get(i + 1).is_some_and(|next| next.can_align)
}

/// Gap after child `i`
pub(crate) fn gap_after(aligned: bool, children: &[ChildHint], i: usize, spacing: i32) -> i32 {
    if i + 1 >= children.len() || joined(aligned, children, i) {
        0
    } else {
        spacing
    }
}

/// Corners for runs of joined children
///
/// `first` is kept by the first member of a run, `last` by the last member.
pub(crate) fn run_corners(
    aligned: bool,
    children: &[ChildHint],
    first: Corners,
    last: Corners,
) -> CornerList {
    (0..children.len())
        .map(|i| {
            let joined_prev = i > 0 && joined(aligned, children, i - 1);
            let joined_next = joined(aligned, children, i);
            match (joined_prev, joined_next) {
                (false, false) => None,
                (false, true) => Some(first),
                (true, true) => Some(Corners::empty()),
                (true, false) => Some(last),
            }
        })
        .collect()
}
