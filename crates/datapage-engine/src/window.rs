/// Size of the leading and trailing preview slices
pub const PREVIEW_EDGE: usize = 3;

/// Dimensions with at most this many options are never truncated
pub const TRUNCATION_THRESHOLD: usize = 9;

/// Half-open index range of the middle preview slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationWindow {
    pub mid_floor: usize,
    pub mid_ceiling: usize,
}

impl TruncationWindow {
    /// Number of indices covered; below 3 only when the floor was clamped
    pub fn span(&self) -> usize {
        self.mid_ceiling - self.mid_floor
    }
}

/// Three-wide window roughly centred on a list of `total` items.
///
/// The floor is clamped at zero but the ceiling is not moved, so slicing must
/// still be bounded by the actual list length.
pub fn compute_window(total: usize) -> TruncationWindow {
    let mid = total / 2;
    TruncationWindow {
        mid_floor: mid.saturating_sub(2),
        mid_ceiling: mid + 1,
    }
}
