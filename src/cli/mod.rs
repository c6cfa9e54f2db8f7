//! Command-line interface module.

mod args;
pub mod init;
pub mod outline;
pub mod render;
pub mod spy;

pub use args::{Cli, Commands, OutlineArgs, RenderArgs, SpyArgs};
