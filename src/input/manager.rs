//! Input manager for handling uploaded documents
//!
//! Every gate here runs before any analysis: existence, extension
//! allow-list, and the upload size cap. Extraction failures surface as
//! structured errors; they never reach the analysis engine.

use crate::config::InputConfig;
use crate::error::{AnalyzerError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    limits: InputConfig,
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new(limits: InputConfig) -> Self {
        Self {
            limits,
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(AnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;

        // Size cap is enforced before any bytes are decoded
        let metadata = fs::metadata(path).await?;
        if metadata.len() > self.limits.max_upload_bytes {
            return Err(AnalyzerError::InputTooLarge(format!(
                "{} is {} bytes, cap is {} bytes",
                path.display(),
                metadata.len(),
                self.limits.max_upload_bytes
            )));
        }

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(AnalyzerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                AnalyzerError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        if !self
            .limits
            .allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
        {
            return Err(AnalyzerError::UnsupportedFormat(format!(
                "Extension .{} not allowed (allowed: {})",
                extension,
                self.limits.allowed_extensions.join(", ")
            )));
        }

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
