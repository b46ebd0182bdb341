use crate::config::Config;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, StatusBadge,
};
use std::path::Path;

pub fn present_config(path: &Path, config: Config) -> CommandResultViewModel<ConfigViewModel> {
    let exists = path.exists();
    let content = ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config,
    };

    let result = CommandResultViewModel::new(content);
    if exists {
        result.with_badge(StatusBadge::success("Config loaded"))
    } else {
        result
            .with_badge(StatusBadge::info("No config file, using defaults"))
            .with_suggestion(
                Guidance::new("Write a default config file").with_command("datapage config init"),
            )
    }
}
