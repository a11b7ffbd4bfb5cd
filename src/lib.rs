pub mod cli;
pub mod config;
pub mod list;
pub mod logging;
pub mod ui;
