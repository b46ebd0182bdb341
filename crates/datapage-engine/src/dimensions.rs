use datapage_types::Dimension;

/// Area-type dimensions first, everything else in upstream order
pub fn order_dimensions(mut dimensions: Vec<Dimension>) -> Vec<Dimension> {
    dimensions.sort_by_key(|d| !d.is_area_type());
    dimensions
}
