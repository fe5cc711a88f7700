/// Platform type extraction from a tool's YAML text output
///
/// This is a line scan, not a YAML parser. The first trimmed line starting
/// with `platformType:` wins, even when it sits in a comment, inside a block
/// scalar or under an unrelated mapping.
use super::{ExtractPlatform, PlatformType};
use crate::error::ExtractionError;

const PLATFORM_TYPE_KEY: &str = "platformType:";

/// Combined stdout and stderr captured from the tool
#[derive(Debug, Clone)]
pub struct ToolOutput(pub String);

impl ToolOutput {
    /// Raw value after the first `platformType:` key, trimmed
    pub fn platform_type_value(&self) -> Option<&str> {
        self.0
            .lines()
            .map(str::trim)
            .find(|line| line.starts_with(PLATFORM_TYPE_KEY))
            .and_then(|line| line.split_once(':'))
            .map(|(_, value)| value.trim())
    }
}

impl ExtractPlatform for ToolOutput {
    fn extract_platform(&self) -> Result<PlatformType, ExtractionError> {
        match self.platform_type_value() {
            None => Err(ExtractionError::NotFound),
            Some("") => Err(ExtractionError::Empty),
            Some(value) => Ok(PlatformType::from(value)),
        }
    }
}
