pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod image;
pub mod service;

pub use anyhow::Result;
