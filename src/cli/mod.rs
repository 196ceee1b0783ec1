pub mod app;
pub mod commands;
pub mod render;
pub mod shell;

pub use app::{Cli, Commands};
