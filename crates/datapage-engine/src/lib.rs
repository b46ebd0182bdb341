// Engine module - Pure presentation logic for dataset dimension options
// This layer sits between decoded upstream data (types) and the page mapper

pub mod comparator;
pub mod dimensions;
pub mod downloads;
pub mod query;
pub mod reveal;
pub mod truncate;
pub mod window;

pub use comparator::{OptionSortKey, compare_codes, sort_key, sort_options};
pub use dimensions::order_dimensions;
pub use downloads::{FORMAT_PRIORITY, order_downloads, unsupported_downloads};
pub use query::{QueryState, RequestTarget};
pub use reveal::{RevealAction, RevealState, SHOW_ALL_PARAM, build_reveal_link, reveal_action};
pub use truncate::{TruncatedOptions, truncate};
pub use window::{PREVIEW_EDGE, TRUNCATION_THRESHOLD, TruncationWindow, compute_window};
