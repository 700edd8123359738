//! Resume analyzer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod analysis;
pub mod output;

pub use analysis::engine::AnalysisEngine;
pub use analysis::report::{AnalysisInput, AnalysisResult, ResumeRecord};
pub use config::Config;
pub use error::{AnalyzerError, Result};
