pub mod number;
pub mod text;

pub use number::humanize_bytes;
pub use text::format_extension;
