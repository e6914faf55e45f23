// File: crates/scatter-core/src/axis.rs
// Summary: Axis configuration records and their renderer-agnostic tick layout.

use crate::record::ClockValue;
use crate::scale::ScaleTransform;
use crate::types::TICK_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    /// Horizontal axis, ticks hanging below the line.
    Bottom,
    /// Vertical axis, ticks pointing left of the line.
    Left,
}

/// Integer labels ("d").
pub fn format_integer(v: f64) -> String {
    format!("{}", v.round() as i64)
}

/// "MM:SS" labels.
pub fn format_clock(v: ClockValue) -> String {
    v.format_mm_ss()
}

/// Everything needed to draw one axis: which scale, where, and how to label it.
#[derive(Clone, Copy, Debug)]
pub struct AxisSpec<S: ScaleTransform> {
    pub id: &'static str,
    pub orient: Orient,
    pub scale: S,
    pub tick_format: fn(S::Value) -> String,
    /// Translation of the axis group.
    pub translate: (f32, f32),
}

impl<S: ScaleTransform> AxisSpec<S> {
    pub fn bottom(id: &'static str, scale: S, tick_format: fn(S::Value) -> String, y: f32) -> Self {
        Self { id, orient: Orient::Bottom, scale, tick_format, translate: (0.0, y) }
    }

    pub fn left(id: &'static str, scale: S, tick_format: fn(S::Value) -> String, x: f32) -> Self {
        Self { id, orient: Orient::Left, scale, tick_format, translate: (x, 0.0) }
    }

    /// Resolve ticks to pixel offsets along the axis.
    pub fn layout(&self, tick_count: usize) -> AxisLayout {
        let ticks = self
            .scale
            .ticks(tick_count)
            .into_iter()
            .map(|v| Tick { offset: self.scale.to_px(v), label: (self.tick_format)(v) })
            .collect();
        AxisLayout {
            id: self.id,
            orient: self.orient,
            translate: self.translate,
            range: self.scale.range(),
            tick_size: TICK_SIZE,
            ticks,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis, in the axis group's coordinates.
    pub offset: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    pub id: &'static str,
    pub orient: Orient,
    pub translate: (f32, f32),
    pub range: (f32, f32),
    pub tick_size: f32,
    pub ticks: Vec<Tick>,
}

impl AxisLayout {
    /// Tick position in chart coordinates.
    pub fn tick_point(&self, tick: &Tick) -> (f32, f32) {
        match self.orient {
            Orient::Bottom => (self.translate.0 + tick.offset, self.translate.1),
            Orient::Left => (self.translate.0, self.translate.1 + tick.offset),
        }
    }

    /// Axis line end points in chart coordinates.
    pub fn line(&self) -> ((f32, f32), (f32, f32)) {
        let (tx, ty) = self.translate;
        let (r0, r1) = self.range;
        match self.orient {
            Orient::Bottom => ((tx + r0, ty), (tx + r1, ty)),
            Orient::Left => ((tx, ty + r0), (tx, ty + r1)),
        }
    }
}

/// Axis caption, optionally rotated about the origin (degrees).
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTitle {
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
    pub rotate: f32,
    pub size: f32,
}
