// src/lib.rs
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod scrape;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
