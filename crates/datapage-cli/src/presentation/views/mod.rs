pub mod config;
pub mod page;

pub use config::ConfigView;
pub use page::{PageView, RevealLinkView};
