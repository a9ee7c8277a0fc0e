//! Input processing module
//! Handles file detection, CV text extraction and JSON record loading

pub mod file_detector;
pub mod manager;
pub mod records;
pub mod text_extractor;

pub use manager::InputManager;
pub use records::{load_jobs, load_user};
