use crate::config::Config;
use crate::presentation::Renderer;
use crate::presentation::presenters::present_config;
use anyhow::{Result, bail};
use std::path::Path;
use tracing::info;

pub fn show(config_path: &Path, renderer: &impl Renderer) -> Result<()> {
    let config = Config::load_from(config_path)?;
    renderer.render(present_config(config_path, config))
}

pub fn init(config_path: &Path, force: bool, renderer: &impl Renderer) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let config = Config::default();
    config.save_to(config_path)?;
    info!(path = %config_path.display(), "wrote default config");

    renderer.render(present_config(config_path, config))
}
