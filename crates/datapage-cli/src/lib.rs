// NOTE: datapage Architecture Rationale
//
// Why a pure engine crate?
// - Option ordering, truncation and reveal links are decided once per page render
// - Every input is request-local, so the engine holds no caches and no globals
// - The same functions back the HTTP handler, this CLI and the property tests
//
// Why explicit Config (not a process-wide static)?
// - Page mapping reads site/download settings passed in by the caller
// - Tests build a Config value inline instead of mutating global state
//
// Why re-derive reveal state from the URL on every request?
// - The query string is the only state; nothing is stored server-side
// - Each reveal link carries the full set of revealed dimensions forward

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
