// File: crates/scatter-core/src/chart.rs
// Summary: Scatter chart builder: records -> scales -> layout, plus headless PNG rendering using Skia CPU raster surfaces.

use anyhow::Result;
use log::debug;
use skia_safe as skia;

use crate::axis::{format_clock, format_integer, AxisLayout, AxisSpec, AxisTitle, Orient};
use crate::dataset::Dataset;
use crate::error::ChartError;
use crate::geometry::Rect;
use crate::legend::Legend;
use crate::record::{ClockValue, DopingCategory, RideRecord};
use crate::scale::{LinearScale, ScaleTransform, TimeScale};
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::tooltip::TooltipContent;
use crate::types::{
    AXIS_TITLE_SIZE, HEIGHT, LEGEND_RECT_SIZE, LEGEND_SPACING, MARK_RADIUS, PADDING, TICK_COUNT,
    TICK_LABEL_SIZE, WIDTH, X_AXIS_TITLE, Y_AXIS_TITLE,
};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub padding: u32,
    pub mark_radius: f32,
    pub legend_rect_size: f32,
    pub legend_spacing: f32,
    pub tick_count: usize,
    pub theme: Theme,
    /// Text on the raster path varies across platforms; snapshots turn it off.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            mark_radius: MARK_RADIUS,
            legend_rect_size: LEGEND_RECT_SIZE,
            legend_spacing: LEGEND_SPACING,
            tick_count: TICK_COUNT,
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

/// One circle per record.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
    pub category: DopingCategory,
    pub color: skia::Color,
    /// Raw year, exposed as `data-xvalue`.
    pub x_value: i32,
    /// Clock value, exposed as `data-yvalue`.
    pub y_value: ClockValue,
    pub tooltip: TooltipContent,
}

/// Fully resolved chart, independent of the output format.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub width: i32,
    pub height: i32,
    pub plot: Rect,
    pub x_scale: LinearScale,
    pub y_scale: TimeScale,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    pub titles: Vec<AxisTitle>,
    pub marks: Vec<Mark>,
    pub legend: Legend,
    pub theme: Theme,
}

pub struct ScatterChart {
    pub records: Vec<RideRecord>,
}

impl ScatterChart {
    pub fn new(records: Vec<RideRecord>) -> Self {
        Self { records }
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self::new(dataset.records)
    }

    /// Compute scales, axes, marks and legend. Scales live only for this call.
    pub fn layout(&self, opts: &RenderOptions) -> Result<ChartLayout, ChartError> {
        let plot = Rect::inset(opts.width, opts.height, opts.padding);
        let x_scale = LinearScale::for_years(&self.records, (plot.left, plot.right))
            .ok_or(ChartError::EmptyDataset)?;
        let y_scale = TimeScale::for_clocks(&self.records, (plot.bottom, plot.top))
            .ok_or(ChartError::EmptyDataset)?;
        debug!(
            target: "chart",
            "x domain [{}, {}], y domain [{}, {}]",
            x_scale.domain.0, x_scale.domain.1, y_scale.domain.0, y_scale.domain.1
        );

        let x_axis = AxisSpec::bottom("x-axis", x_scale, format_integer, plot.bottom).layout(opts.tick_count);
        let y_axis = AxisSpec::left("y-axis", y_scale, format_clock, plot.left).layout(opts.tick_count);

        let (w, h) = (opts.width as f32, opts.height as f32);
        let titles = vec![
            AxisTitle { text: X_AXIS_TITLE, x: w / 2.0, y: h - 20.0, rotate: 0.0, size: AXIS_TITLE_SIZE },
            AxisTitle {
                text: Y_AXIS_TITLE,
                x: -h / 2.0,
                y: opts.padding as f32 - 45.0,
                rotate: -90.0,
                size: AXIS_TITLE_SIZE,
            },
        ];

        let palette = opts.theme.palette.for_records(&self.records);
        let marks = self
            .records
            .iter()
            .map(|r| {
                let category = r.category();
                Mark {
                    cx: x_scale.to_px(f64::from(r.year)),
                    cy: y_scale.to_px(r.time),
                    r: opts.mark_radius,
                    category,
                    color: palette.color(category),
                    x_value: r.year,
                    y_value: r.time,
                    tooltip: TooltipContent::for_record(r),
                }
            })
            .collect();

        let legend = Legend::new(
            &palette,
            (w * 2.0 / 3.0, h * 3.0 / 4.0),
            opts.legend_rect_size,
            opts.legend_spacing,
        );

        Ok(ChartLayout {
            width: opts.width,
            height: opts.height,
            plot,
            x_scale,
            y_scale,
            x_axis,
            y_axis,
            titles,
            marks,
            legend,
            theme: opts.theme,
        })
    }

    /// Standalone SVG document.
    pub fn render_to_svg(&self, opts: &RenderOptions) -> Result<String, ChartError> {
        Ok(crate::svg::render_svg(&self.layout(opts)?))
    }

    /// HTML page holding the SVG inside `#graph`.
    pub fn render_to_html(&self, opts: &RenderOptions) -> Result<String, ChartError> {
        let svg = self.render_to_svg(opts)?;
        Ok(crate::svg::wrap_html(&svg, &opts.theme))
    }

    /// Encode the chart as PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let layout = self.layout(opts)?;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(layout.theme.background);

        let shaper = opts.draw_labels.then(TextShaper::new);
        draw_axis(canvas, &layout.x_axis, &layout.theme, shaper.as_ref());
        draw_axis(canvas, &layout.y_axis, &layout.theme, shaper.as_ref());
        if let Some(shaper) = shaper.as_ref() {
            draw_titles(canvas, &layout.titles, &layout.theme, shaper);
        }
        draw_marks(canvas, &layout.marks);
        draw_legend(canvas, &layout.legend, &layout.theme, shaper.as_ref());

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn draw_axis(canvas: &skia::Canvas, axis: &AxisLayout, theme: &Theme, shaper: Option<&TextShaper>) {
    let line = stroke(theme.axis_line, 1.0);
    let (a, b) = axis.line();
    canvas.draw_line(a, b, &line);

    let tick_paint = stroke(theme.tick, 1.0);
    for tick in &axis.ticks {
        let (x, y) = axis.tick_point(tick);
        match axis.orient {
            Orient::Bottom => {
                canvas.draw_line((x, y), (x, y + axis.tick_size), &tick_paint);
                if let Some(s) = shaper {
                    let baseline = y + axis.tick_size + 3.0 + TICK_LABEL_SIZE * 0.71;
                    s.draw(canvas, &tick.label, x, baseline, TICK_LABEL_SIZE, theme.tick, Align::Center, false);
                }
            }
            Orient::Left => {
                canvas.draw_line((x - axis.tick_size, y), (x, y), &tick_paint);
                if let Some(s) = shaper {
                    let baseline = y + TICK_LABEL_SIZE * 0.32;
                    let right = x - axis.tick_size - 3.0;
                    s.draw(canvas, &tick.label, right, baseline, TICK_LABEL_SIZE, theme.tick, Align::Right, false);
                }
            }
        }
    }
}

fn draw_titles(canvas: &skia::Canvas, titles: &[AxisTitle], theme: &Theme, shaper: &TextShaper) {
    for t in titles {
        canvas.save();
        if t.rotate != 0.0 {
            canvas.rotate(t.rotate, None);
        }
        shaper.draw(canvas, t.text, t.x, t.y, t.size, theme.axis_label, Align::Left, true);
        canvas.restore();
    }
}

fn draw_marks(canvas: &skia::Canvas, marks: &[Mark]) {
    for m in marks {
        canvas.draw_circle((m.cx, m.cy), m.r, &fill(m.color));
    }
}

fn draw_legend(canvas: &skia::Canvas, legend: &Legend, theme: &Theme, shaper: Option<&TextShaper>) {
    let (ox, oy) = legend.origin;
    let (tx, ty) = legend.caption_anchor();
    for entry in &legend.entries {
        let top = oy + entry.offset_y;
        let rect = skia::Rect::from_xywh(ox, top, legend.rect_size, legend.rect_size);
        canvas.draw_rect(rect, &fill(entry.color));
        canvas.draw_rect(rect, &stroke(entry.color, 1.0));
        if let Some(s) = shaper {
            // dy = 0.25em below the anchor
            let baseline = top + ty + TICK_LABEL_SIZE * 0.25;
            s.draw(canvas, entry.caption, ox + tx, baseline, TICK_LABEL_SIZE, theme.axis_label, Align::Left, false);
        }
    }
}
