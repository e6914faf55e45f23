// File: crates/scatter-core/src/legend.rs
// Summary: Fixed two-entry legend keyed by doping category.

use skia_safe as skia;

use crate::record::DopingCategory;
use crate::theme::Palette;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub category: DopingCategory,
    pub color: skia::Color,
    pub caption: &'static str,
    /// Row offset inside the legend group.
    pub offset_y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    /// Translation of the legend group.
    pub origin: (f32, f32),
    pub rect_size: f32,
    pub spacing: f32,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// One row per palette key, in palette domain order.
    pub fn new(palette: &Palette, origin: (f32, f32), rect_size: f32, spacing: f32) -> Self {
        let entries = palette
            .domain()
            .iter()
            .enumerate()
            .map(|(i, &category)| LegendEntry {
                category,
                color: palette.color(category),
                caption: category.caption(),
                offset_y: i as f32 * (rect_size + spacing),
            })
            .collect();
        Self { origin, rect_size, spacing, entries }
    }

    /// Caption anchor relative to an entry's row.
    pub fn caption_anchor(&self) -> (f32, f32) {
        (self.rect_size + self.spacing, self.rect_size - self.spacing)
    }
}
