use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PageViewModel {
    pub dataset_id: String,
    pub title: String,
    pub description: Option<String>,
    pub language: String,
    pub path: String,
    pub dimensions: Vec<DimensionViewModel>,
    pub downloads: Vec<DownloadViewModel>,
}

#[derive(Debug, Serialize)]
pub struct DimensionViewModel {
    pub id: String,
    pub label: String,
    pub is_area_type: bool,
    pub total_items: usize,
    pub options: Vec<OptionViewModel>,
    pub is_truncated: bool,
    /// Options left out of the preview
    pub hidden_count: usize,
    pub reveal_link: Option<RevealLinkViewModel>,
}

#[derive(Debug, Serialize)]
pub struct OptionViewModel {
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealLinkAction {
    Reveal,
    Collapse,
}

impl From<datapage_engine::RevealAction> for RevealLinkAction {
    fn from(action: datapage_engine::RevealAction) -> Self {
        match action {
            datapage_engine::RevealAction::Reveal => Self::Reveal,
            datapage_engine::RevealAction::Collapse => Self::Collapse,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RevealLinkViewModel {
    pub action: RevealLinkAction,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct DownloadViewModel {
    pub extension: String,
    /// `None` when the upstream size is not a byte count
    pub size_bytes: Option<u64>,
    pub size_raw: String,
    pub uri: String,
}

#[derive(Debug, Serialize)]
pub struct RevealLinkResultViewModel {
    pub dimension_id: String,
    pub action: RevealLinkAction,
    pub href: String,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for PageViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::page::PageView;
        Box::new(PageView::new(self, mode))
    }
}

impl CreateView for RevealLinkResultViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::page::RevealLinkView;
        Box::new(RevealLinkView::new(self))
    }
}

// --------------------------------------------------------
// Display Trait (for default rendering)
// --------------------------------------------------------

impl fmt::Display for PageViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
