//! Screen layout and hit-testing.
//!
//! Each producer owns one corner-anchored rectangle. Bounds are inclusive on
//! every edge.

use crate::producer::ProducerId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Corner assignment, indexed by `ProducerId::index()`.
const CORNERS: [Corner; ProducerId::COUNT] =
    [Corner::TopLeft, Corner::TopRight, Corner::BottomLeft, Corner::BottomRight];

impl Corner {
    pub fn of(id: ProducerId) -> Corner {
        CORNERS[id.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub zone_w: i32,
    pub zone_h: i32,
    /// Left edge of the left-hand zones.
    pub left_x: i32,
    /// Distance from the right screen edge to the right-hand zones' left edge.
    pub right_inset: i32,
    /// Top edge of the upper zones.
    pub top_y: i32,
    /// Distance from the bottom screen edge to the lower zones' top edge.
    pub bottom_inset: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            zone_w: 370,
            zone_h: 130,
            left_x: 30,
            right_inset: 400,
            top_y: 120,
            bottom_inset: 200,
        }
    }
}

impl Layout {
    pub fn zone(&self, id: ProducerId) -> Rect {
        let (x, y) = match Corner::of(id) {
            Corner::TopLeft => (self.left_x, self.top_y),
            Corner::TopRight => (self.width - self.right_inset, self.top_y),
            Corner::BottomLeft => (self.left_x, self.height - self.bottom_inset),
            Corner::BottomRight => (self.width - self.right_inset, self.height - self.bottom_inset),
        };
        Rect { x, y, w: self.zone_w, h: self.zone_h }
    }

    /// First zone containing the point, in id order.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<ProducerId> {
        ProducerId::ALL.into_iter().find(|id| self.zone(*id).contains(x, y))
    }
}
