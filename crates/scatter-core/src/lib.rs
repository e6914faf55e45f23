// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the record model, scales, layout and renderers.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod legend;
pub mod record;
pub mod scale;
pub mod svg;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{AxisLayout, AxisSpec, Orient};
pub use chart::{ChartLayout, Mark, RenderOptions, ScatterChart};
pub use dataset::{Dataset, SkippedRecord};
pub use error::{ChartError, TimeParseError};
pub use legend::Legend;
pub use record::{ClockValue, DopingCategory, RideRecord};
pub use scale::{LinearScale, ScaleTransform, TimeScale};
pub use theme::{Palette, Theme};
pub use tooltip::{TooltipContent, TooltipState};
