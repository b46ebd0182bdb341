use datapage_types::DownloadDescriptor;

/// Display order of supported download formats, highest priority first
pub const FORMAT_PRIORITY: [&str; 5] = ["xls", "xlsx", "csv", "txt", "csvw"];

/// Reorder downloads into [`FORMAT_PRIORITY`] order.
///
/// Formats outside the priority list are dropped. When an extension appears
/// more than once, the first descriptor in input order wins.
pub fn order_downloads(downloads: &[DownloadDescriptor]) -> Vec<DownloadDescriptor> {
    FORMAT_PRIORITY
        .iter()
        .filter_map(|format| {
            downloads
                .iter()
                .find(|d| d.normalized_extension() == *format)
                .cloned()
        })
        .collect()
}

/// Downloads that [`order_downloads`] leaves out
pub fn unsupported_downloads(downloads: &[DownloadDescriptor]) -> Vec<&DownloadDescriptor> {
    downloads
        .iter()
        .filter(|d| !FORMAT_PRIORITY.contains(&d.normalized_extension().as_str()))
        .collect()
}
