//! # quadbench-cli
//!
//! CLI output, result presentation, terminal sizing, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod terminal;
pub mod ui;

pub use presenter::{CliResultPresenter, JsonResultPresenter};
