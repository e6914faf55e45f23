// File: crates/scatter-core/src/geometry.rs
// Summary: Lightweight geometry helpers for the plot area.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Plot area of a `width` x `height` surface with uniform padding.
    pub fn inset(width: i32, height: i32, padding: u32) -> Self {
        let p = padding as f32;
        Self::from_ltrb(p, p, width as f32 - p, height as f32 - p)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}
