pub mod config;
pub mod page;

pub use config::present_config;
pub use page::{present_page, present_reveal_link};
