pub mod common;
pub mod config;
pub mod page;
pub mod result;

pub use common::{Guidance, StatusBadge, StatusLevel, ViewMode};
pub use config::ConfigViewModel;
pub use page::{
    DimensionViewModel, DownloadViewModel, OptionViewModel, PageViewModel, RevealLinkAction,
    RevealLinkResultViewModel, RevealLinkViewModel,
};
pub use result::CommandResultViewModel;

use std::fmt;

/// Bridge from a ViewModel to its text View
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
