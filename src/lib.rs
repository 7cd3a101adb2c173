// src/lib.rs

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod runner;
pub mod specs;
pub mod xlsx;

pub use error::{Error, Result};
