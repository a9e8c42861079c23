pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
pub mod mvi;
pub mod script;
pub mod ui;
