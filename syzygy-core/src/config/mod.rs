//! Configuration types for Syzygy

use crate::SyzygyError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub alignment: AlignmentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentConfig {
    /// Linear gap penalty applied per inserted or deleted position
    #[serde(default = "default_gap_penalty")]
    pub gap_penalty: i32,
    /// Default alignment mode ("global" or "local")
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Minimum row/column separation between recorded local maxima
    #[serde(default = "default_min_separation")]
    pub min_separation: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Column width for wrapped FASTA sequence lines
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

// Default value functions
fn default_gap_penalty() -> i32 {
    -1
}
fn default_mode() -> String {
    "global".to_string()
}
fn default_min_separation() -> usize {
    6
}
fn default_line_width() -> usize {
    80
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            gap_penalty: default_gap_penalty(),
            mode: default_mode(),
            min_separation: default_min_separation(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, SyzygyError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| SyzygyError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), SyzygyError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| SyzygyError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.alignment.gap_penalty, -1);
        assert_eq!(config.alignment.mode, "global");
        assert_eq!(config.alignment.min_separation, 6);
        assert_eq!(config.output.line_width, 80);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let toml_str = r#"
            [alignment]
            gap_penalty = -2
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();

        assert_eq!(config.alignment.gap_penalty, -2);
        assert_eq!(config.alignment.mode, "global");
        assert_eq!(config.output.line_width, 80);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[alignment]").unwrap();
        writeln!(file, "gap_penalty = -3").unwrap();
        writeln!(file, "mode = \"local\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.alignment.gap_penalty, -3);
        assert_eq!(config.alignment.mode, "local");
        assert_eq!(config.alignment.min_separation, 6);
    }

    #[test]
    fn test_load_config_rejects_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        let result = load_config(file.path());
        assert!(matches!(result, Err(SyzygyError::Configuration(_))));
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.alignment.gap_penalty = -5;
        config.output.line_width = 60;

        save_config(file.path(), &config).unwrap();
        let reloaded = load_config(file.path()).unwrap();

        assert_eq!(reloaded.alignment.gap_penalty, -5);
        assert_eq!(reloaded.output.line_width, 60);
    }
}
