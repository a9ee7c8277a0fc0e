//! Text-to-profile extraction

pub mod contact;
pub mod dictionary;
pub mod experience;
pub mod pipeline;
pub mod skills;
pub mod summary;

pub use pipeline::CvAnalyzer;
