// File: crates/scatter-core/src/tooltip.rs
// Summary: Hover tooltip content and its show/hide transitions.

use crate::record::RideRecord;

/// Text shown while the pointer is over a mark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    /// Mirrored onto the tooltip as `data-year`.
    pub year: i32,
    /// "Name: NAT"
    pub heading: String,
    /// "Year: 1995 Time: 36:50"
    pub detail: String,
    /// Doping annotation, empty when none.
    pub doping: String,
}

impl TooltipContent {
    pub fn for_record(record: &RideRecord) -> Self {
        Self {
            year: record.year,
            heading: format!("{}: {}", record.name, record.nationality),
            detail: format!("Year: {} Time: {}", record.year, record.time.format_mm_ss()),
            doping: record.doping.clone(),
        }
    }

    /// Non-empty lines in display order.
    pub fn lines(&self) -> Vec<&str> {
        [self.heading.as_str(), self.detail.as_str(), self.doping.as_str()]
            .into_iter()
            .filter(|l| !l.is_empty())
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible(TooltipContent),
}

impl TooltipState {
    /// Pointer entered a mark.
    pub fn show(record: &RideRecord) -> Self {
        Self::Visible(TooltipContent::for_record(record))
    }

    /// Pointer left a mark.
    pub fn hide() -> Self {
        Self::Hidden
    }

    pub fn is_visible(&self) -> bool { matches!(self, Self::Visible(_)) }

    /// `data-year` carried by the tooltip element, if shown.
    pub fn data_year(&self) -> Option<i32> {
        match self {
            Self::Visible(c) => Some(c.year),
            Self::Hidden => None,
        }
    }
}
