pub mod ai;
pub mod cli;
pub mod config;
pub mod deck;
pub mod logging;
pub mod presenter;
pub mod ui;
