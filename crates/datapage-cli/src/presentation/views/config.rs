use std::fmt;

use crate::presentation::view_models::{ConfigViewModel, ViewMode};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    mode: ViewMode,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.path);
        }

        let status = if self.data.exists { "" } else { " (not found)" };
        writeln!(f, "Config: {}{}", self.data.path, status)?;
        writeln!(f)?;

        let config = &self.data.config;
        writeln!(f, "[site]")?;
        writeln!(f, "  domain:   {}", config.site.domain)?;
        writeln!(f, "  language: {}", config.site.language)?;
        writeln!(f)?;
        writeln!(f, "[downloads]")?;
        writeln!(
            f,
            "  base_url: {}",
            config.downloads.base_url.as_deref().unwrap_or("(unset)")
        )?;
        Ok(())
    }
}
