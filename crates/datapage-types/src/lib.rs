pub mod dimension;
pub mod download;
pub mod error;
pub mod page;

pub use dimension::{Dimension, DimensionKind, DimensionOption};
pub use download::DownloadDescriptor;
pub use error::{Error, Result};
pub use page::PageInput;
