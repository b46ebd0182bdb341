use crate::config::Config;
use crate::presentation::Renderer;
use crate::presentation::presenters::page::{default_target, present_page};
use anyhow::{Context, Result};
use datapage_engine::RequestTarget;
use datapage_types::PageInput;
use std::path::Path;
use tracing::info;

pub fn handle(
    input_path: &Path,
    url: Option<&str>,
    config: &Config,
    renderer: &impl Renderer,
) -> Result<()> {
    let input = PageInput::load_from(input_path)
        .with_context(|| format!("Failed to load page input: {}", input_path.display()))?;

    let target = match url {
        Some(raw) => RequestTarget::parse(raw),
        None => default_target(&input.id),
    };

    info!(
        dataset = %input.id,
        path = %target.path,
        dimensions = input.dimensions.len(),
        "rendering page"
    );

    let result = present_page(input, &target, config);
    renderer.render(result)
}
