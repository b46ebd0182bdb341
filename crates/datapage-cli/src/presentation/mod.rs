//! # Presentation Layer
//!
//! Data flows one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!    (Controller)      (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> Output
//!                                                                                 (Layout)
//! ```
//!
//! ## Rules
//!
//! * **ViewModels hold raw data.** `size_bytes: Option<u64>`, not `"4.4 MB"`.
//!   JSON output is an API.
//! * **`ViewMode` is information density**, not shape. JSON ignores it.
//! * **Presenters** call the engine and decide what to show (badges, tips).
//! * **Views** implement `fmt::Display` and use `formatters`.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel, ViewMode,
};
