//! Axis-aligned rectangles for sprite bounds and collision

use macroquad::prelude::{vec2, Vec2};

/// A rectangle defined by its top-left corner and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rect of the given size centred on a point
    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w * 0.5, center.y - h * 0.5, w, h)
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Center Y
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.center_x(), self.center_y())
    }

    /// Strict overlap test: rects that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Move this rect inside `bounds` along each axis.
    /// A rect larger than `bounds` on an axis is centred on that axis.
    pub fn clamped_within(&self, bounds: &Rect) -> Self {
        let clamp_axis = |pos: f32, size: f32, min: f32, extent: f32| {
            if size >= extent {
                min + (extent - size) * 0.5
            } else {
                pos.clamp(min, min + extent - size)
            }
        };
        Self::new(
            clamp_axis(self.x, self.w, bounds.x, bounds.w),
            clamp_axis(self.y, self.h, bounds.y, bounds.h),
            self.w,
            self.h,
        )
    }
}
