pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod project;
pub mod ui;
pub mod updater;

pub use error::{EbumpError, Result};
