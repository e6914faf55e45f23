// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming plus the two-color doping palette.

use skia_safe as skia;

use crate::record::{DopingCategory, RideRecord};

/// Two-color ordinal palette keyed by doping category.
/// Scheme slots go to keys in the order they are first seen; keys never
/// seen follow in `false`, `true` order so the domain always has both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub scheme: [skia::Color; 2],
    domain: [DopingCategory; 2],
}

impl Palette {
    /// First two entries of the Dark2 scheme.
    pub fn dark2() -> Self {
        Self {
            scheme: [
                skia::Color::from_argb(255, 0x1b, 0x9e, 0x77),
                skia::Color::from_argb(255, 0xd9, 0x5f, 0x02),
            ],
            domain: DopingCategory::ALL,
        }
    }

    /// Rebuild the domain from `categories` in first-seen order.
    pub fn with_domain<I>(self, categories: I) -> Self
    where
        I: IntoIterator<Item = DopingCategory>,
    {
        let mut domain = DopingCategory::ALL;
        let mut filled = 0;
        for category in categories.into_iter().chain(DopingCategory::ALL) {
            if filled == domain.len() {
                break;
            }
            if !domain[..filled].contains(&category) {
                domain[filled] = category;
                filled += 1;
            }
        }
        Self { domain, ..self }
    }

    pub fn for_records(self, records: &[RideRecord]) -> Self {
        self.with_domain(records.iter().map(RideRecord::category))
    }

    pub fn domain(&self) -> [DopingCategory; 2] { self.domain }

    pub fn color(&self, category: DopingCategory) -> skia::Color {
        if self.domain[0] == category { self.scheme[0] } else { self.scheme[1] }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub tooltip_text: skia::Color,
    pub tooltip_background: skia::Color,
    pub error_text: skia::Color,
    pub palette: Palette,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            tooltip_text: skia::Color::from_argb(255, 0xff, 0x66, 0x00),
            tooltip_background: skia::Color::from_argb(230, 255, 255, 255),
            error_text: skia::Color::from_argb(255, 200, 40, 40),
            palette: Palette::dark2(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tooltip_text: skia::Color::from_argb(255, 0xff, 0x66, 0x00),
            tooltip_background: skia::Color::from_argb(230, 30, 30, 34),
            error_text: skia::Color::from_argb(255, 240, 90, 90),
            palette: Palette::dark2(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// `#rrggbb` for SVG attributes.
pub fn css_hex(color: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// `rgba(...)` when the color is translucent, `#rrggbb` otherwise.
pub fn css_color(color: skia::Color) -> String {
    if color.a() == 255 {
        css_hex(color)
    } else {
        format!("rgba({},{},{},{:.2})", color.r(), color.g(), color.b(), color.a() as f32 / 255.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_follows_first_seen_order() {
        let base = Palette::dark2();
        assert_eq!(base.domain(), DopingCategory::ALL);

        let p = base.with_domain([DopingCategory::Allegation, DopingCategory::NoAllegation, DopingCategory::Allegation]);
        assert_eq!(p.domain(), [DopingCategory::Allegation, DopingCategory::NoAllegation]);
        assert_eq!(css_hex(p.color(DopingCategory::Allegation)), "#1b9e77");
        assert_eq!(css_hex(p.color(DopingCategory::NoAllegation)), "#d95f02");
    }

    #[test]
    fn unseen_keys_fill_the_rest_of_the_domain() {
        let p = Palette::dark2().with_domain([DopingCategory::Allegation]);
        assert_eq!(p.domain(), [DopingCategory::Allegation, DopingCategory::NoAllegation]);
        let empty = Palette::dark2().with_domain(std::iter::empty());
        assert_eq!(empty.domain(), DopingCategory::ALL);
        assert_eq!(css_hex(empty.color(DopingCategory::NoAllegation)), "#1b9e77");
    }
}
