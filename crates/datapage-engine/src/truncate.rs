use crate::comparator::sort_options;
use crate::reveal::RevealState;
use crate::window::{PREVIEW_EDGE, TRUNCATION_THRESHOLD, compute_window};
use datapage_types::{Dimension, DimensionOption};
use serde::Serialize;

/// Display-ready option list for one dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruncatedOptions {
    pub options: Vec<DimensionOption>,
    pub is_truncated: bool,
}

impl TruncatedOptions {
    fn full(options: Vec<DimensionOption>) -> Self {
        Self {
            options,
            is_truncated: false,
        }
    }
}

/// Sort a dimension's options and compress long lists into a preview of the
/// first three, middle three and last three options.
///
/// Short lists, revealed dimensions and area types come back whole. The
/// window is computed from `total_items` but every slice is bounded by the
/// options actually present. Overlapping slices are not deduplicated.
pub fn truncate(dimension: &Dimension, reveal_state: &RevealState) -> TruncatedOptions {
    if dimension.total_items == 0 {
        return TruncatedOptions::full(Vec::new());
    }

    let mut sorted = dimension.options.clone();
    sort_options(&mut sorted);

    if dimension.total_items <= TRUNCATION_THRESHOLD
        || reveal_state.contains(&dimension.id)
        || dimension.is_area_type()
    {
        return TruncatedOptions::full(sorted);
    }

    let len = sorted.len();
    let window = compute_window(dimension.total_items);

    let first = &sorted[..PREVIEW_EDGE.min(len)];
    let middle = &sorted[window.mid_floor.min(len)..window.mid_ceiling.min(len)];
    let last = &sorted[len.saturating_sub(PREVIEW_EDGE)..];

    let mut preview = Vec::with_capacity(first.len() + middle.len() + last.len());
    preview.extend_from_slice(first);
    preview.extend_from_slice(middle);
    preview.extend_from_slice(last);

    TruncatedOptions {
        options: preview,
        is_truncated: true,
    }
}
