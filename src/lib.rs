// src/lib.rs

#[macro_use]
pub mod macros;

pub mod analysis;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod gui;
pub mod logger;
pub mod model;
pub mod progress;
pub mod report;
pub mod scrape;
pub mod specs;
pub mod store;
