// File: crates/scatter-core/src/types.rs
// Summary: Shared constants (viewbox, padding, mark and legend geometry, captions).

/// Logical viewbox width.
pub const WIDTH: i32 = 1000;
/// Logical viewbox height.
pub const HEIGHT: i32 = 600;
/// Uniform padding around the plot area.
pub const PADDING: u32 = 60;

/// Radius of one scatter mark.
pub const MARK_RADIUS: f32 = 5.0;

/// Side length of a legend swatch.
pub const LEGEND_RECT_SIZE: f32 = 15.0;
/// Gap between legend rows, and between swatch and caption.
pub const LEGEND_SPACING: f32 = 6.0;

/// Size of the axis tick marks.
pub const TICK_SIZE: f32 = 6.0;
/// Tick count hint handed to the scales.
pub const TICK_COUNT: usize = 10;

pub const X_AXIS_TITLE: &str = "Year";
pub const Y_AXIS_TITLE: &str = "Time in Minutes";
pub const AXIS_TITLE_SIZE: f32 = 15.0;
pub const TICK_LABEL_SIZE: f32 = 10.0;

pub const CAPTION_NO_ALLEGATION: &str = "No doping allegations";
pub const CAPTION_ALLEGATION: &str = "Riders with doping allegations";

/// Dataset published alongside the original chart.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";
