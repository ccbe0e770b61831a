//! gsqr-cli: command handlers, run configuration, report rendering and the
//! interactive menu behind the `gsqr` binary.
pub mod commands;
pub mod config;
pub mod menu;
pub mod report;
