use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::config::{Config, resolve_config_path};
use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let json_mode = cli.format == OutputFormat::Json;

    match cli.command {
        Commands::Render {
            input,
            url,
            view_mode,
        } => {
            let config = Config::load_from(&config_path)?;
            let renderer = ConsoleRenderer::new(json_mode, view_mode.resolve());
            handlers::render::handle(&input, url.as_deref(), &config, &renderer)
        }

        Commands::Reveal { url, dimension } => {
            let renderer = ConsoleRenderer::new(json_mode, Default::default());
            handlers::reveal::handle(&url, &dimension, &renderer)
        }

        Commands::Config { command } => {
            let renderer = ConsoleRenderer::new(json_mode, Default::default());
            match command {
                ConfigCommand::Show => handlers::config::show(&config_path, &renderer),
                ConfigCommand::Init { force } => {
                    handlers::config::init(&config_path, force, &renderer)
                }
            }
        }
    }
}
