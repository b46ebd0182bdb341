use std::fmt;

use crate::presentation::formatters::{format_extension, humanize_bytes};
use crate::presentation::view_models::{
    DimensionViewModel, DownloadViewModel, PageViewModel, RevealLinkAction,
    RevealLinkResultViewModel, ViewMode,
};

// --------------------------------------------------------
// Page View
// --------------------------------------------------------

pub struct PageView<'a> {
    data: &'a PageViewModel,
    mode: ViewMode,
}

impl<'a> PageView<'a> {
    pub fn new(data: &'a PageViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for dim in &self.data.dimensions {
            match &dim.reveal_link {
                Some(link) => writeln!(f, "{} {}", dim.id, link.href)?,
                None => writeln!(f, "{}", dim.id)?,
            }
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} ({})", self.data.title, self.data.dataset_id)?;

        for dim in &self.data.dimensions {
            let marker = if dim.is_truncated {
                " truncated"
            } else if dim.is_area_type {
                " area"
            } else {
                ""
            };
            writeln!(
                f,
                "  {} {}/{}{}",
                dim.label,
                dim.options.len(),
                dim.total_items,
                marker
            )?;
        }

        if !self.data.downloads.is_empty() {
            let extensions: Vec<&str> = self
                .data
                .downloads
                .iter()
                .map(|d| d.extension.as_str())
                .collect();
            writeln!(f, "  downloads: {}", extensions.join(", "))?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let verbose = self.mode == ViewMode::Verbose;

        writeln!(f, "{} ({})", self.data.title, self.data.dataset_id)?;
        if let Some(description) = &self.data.description {
            writeln!(f, "{}", description)?;
        }
        if verbose {
            writeln!(f, "path: {}  language: {}", self.data.path, self.data.language)?;
        }

        for dim in &self.data.dimensions {
            writeln!(f)?;
            render_dimension(f, dim, verbose)?;
        }

        if !self.data.downloads.is_empty() {
            writeln!(f)?;
            writeln!(f, "Downloads:")?;
            for download in &self.data.downloads {
                render_download(f, download, verbose)?;
            }
        }
        Ok(())
    }
}

fn render_dimension(f: &mut fmt::Formatter, dim: &DimensionViewModel, verbose: bool) -> fmt::Result {
    let kind = if dim.is_area_type { " [area]" } else { "" };
    writeln!(f, "{}{} - {} option(s)", dim.label, kind, dim.total_items)?;

    for option in &dim.options {
        if verbose {
            writeln!(f, "  - {} [{}]", option.label, option.code)?;
        } else {
            writeln!(f, "  - {}", option.label)?;
        }
    }

    if dim.hidden_count > 0 {
        writeln!(f, "  ... {} more", dim.hidden_count)?;
    }

    if let Some(link) = &dim.reveal_link {
        let verb = match link.action {
            RevealLinkAction::Reveal => "Show all",
            RevealLinkAction::Collapse => "Show fewer",
        };
        writeln!(f, "  {}: {}", verb, link.href)?;
    }
    Ok(())
}

fn render_download(
    f: &mut fmt::Formatter,
    download: &DownloadViewModel,
    verbose: bool,
) -> fmt::Result {
    let size = download
        .size_bytes
        .map(humanize_bytes)
        .unwrap_or_else(|| download.size_raw.clone());
    let name = format_extension(&download.extension);

    if verbose {
        writeln!(
            f,
            "  {} - {} ({}) {}",
            name, size, download.size_raw, download.uri
        )
    } else {
        writeln!(f, "  {} - {}", name, size)
    }
}

impl<'a> fmt::Display for PageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_standard(f),
        }
    }
}

// --------------------------------------------------------
// Reveal Link View
// --------------------------------------------------------

pub struct RevealLinkView<'a> {
    data: &'a RevealLinkResultViewModel,
}

impl<'a> RevealLinkView<'a> {
    pub fn new(data: &'a RevealLinkResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for RevealLinkView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.href)
    }
}
