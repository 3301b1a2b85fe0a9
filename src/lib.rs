//! Terminal Snake (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_snake::{core,engine,input,store,term,types}` and
//! adds the runner's configuration and log setup.

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_input as input;
pub use tui_snake_store as store;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub mod config;
pub mod logging;

pub use config::Config;
