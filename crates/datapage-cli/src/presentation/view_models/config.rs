use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};
use crate::config::Config;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub config: Config,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigView;
        Box::new(ConfigView::new(self, mode))
    }
}
