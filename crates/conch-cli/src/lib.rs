mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod types;

pub use args::{Cli, Commands, DeviceCommand, HardwareCommand, MboCommand, ReportCommand};
pub use commands::run;
