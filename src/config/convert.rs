use crate::params::SdfParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ConvertToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: SdfParams,
    pub output: ConvertOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ConvertOutputConfig {
    /// Where the distance field image is written (format by extension).
    pub image: PathBuf,
    /// Optional JSON dump of the conversion report.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ConvertToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("{e} ({})", path.display()))
}

pub fn parse_config(data: &str) -> Result<ConvertToolConfig, String> {
    serde_json::from_str(data).map_err(|e| format!("Failed to parse config: {e}"))
}
