//! CV matcher library

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod input;
pub mod matching;
pub mod models;
pub mod output;

pub use config::Config;
pub use error::{CvMatchError, Result};
