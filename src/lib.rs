// src/lib.rs

#[macro_use]
pub mod macros;
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod chart;
pub mod csv;
pub mod data;
pub mod file;
pub mod progress;
pub mod runner;
pub mod scrape;

pub mod cli;
pub mod gui;
