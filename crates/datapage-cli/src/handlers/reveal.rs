use crate::presentation::Renderer;
use crate::presentation::presenters::present_reveal_link;
use anyhow::{Result, bail};
use datapage_engine::RequestTarget;

pub fn handle(url: &str, dimension_id: &str, renderer: &impl Renderer) -> Result<()> {
    if dimension_id.is_empty() {
        bail!("Dimension ID must not be empty");
    }

    let target = RequestTarget::parse(url);
    renderer.render(present_reveal_link(&target, dimension_id))
}
