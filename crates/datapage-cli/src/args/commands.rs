use super::common::ViewModeArgs;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Map a page input file into a page model")]
    Render {
        #[arg(long, help = "Decoded page input (JSON)")]
        input: PathBuf,

        #[arg(
            long,
            help = "Incoming request target, e.g. '/datasets/cpih01?showAll=time' (default: /datasets/<id>)"
        )]
        url: Option<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Print the link that toggles one dimension's full option list")]
    Reveal {
        #[arg(long, help = "Current request target")]
        url: String,

        #[arg(long, help = "Dimension ID")]
        dimension: String,
    },

    #[command(about = "Manage configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the effective configuration")]
    Show,

    #[command(about = "Write a default configuration file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
