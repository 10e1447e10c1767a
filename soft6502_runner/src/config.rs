use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use soft6502_lib::{CPUConfiguration, DEFAULT_START_ADDRESS};

use crate::AppResult;

/// Settings of one emulation session, read from a YAML file.
/// Command line flags take precedence over these values.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Binary image, relative paths are resolved from the file's directory.
    pub program: Option<PathBuf>,
    /// Where the image is written in memory.
    pub origin: u16,
    pub max_cycles: Option<u64>,
    pub cpu: CPUConfiguration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            program: None,
            origin: DEFAULT_START_ADDRESS,
            max_cycles: None,
            cpu: CPUConfiguration::default(),
        }
    }
}

impl SessionConfig {
    pub fn load(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        let document: serde_yaml::Value = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML from {}", path.display()))?;
        let start_given = document
            .get("cpu")
            .and_then(|cpu| cpu.get("start_address"))
            .is_some();
        let mut config: SessionConfig = serde_yaml::from_value(document)
            .with_context(|| format!("Failed to parse YAML from {}", path.display()))?;

        // without an explicit start address, execution begins at the origin
        if !start_given {
            config.cpu.start_address = config.origin;
        }

        let config_dir = path.parent().unwrap_or_else(|| Path::new(""));
        config.resolve_paths(config_dir);

        Ok(config)
    }

    fn resolve_paths(&mut self, base_dir: &Path) {
        if let Some(program) = &self.program {
            if program.is_relative() {
                self.program = Some(base_dir.join(program));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(0x0600, config.origin);
        assert!(config.program.is_none());
        assert!(config.max_cycles.is_none());
        assert_eq!(CPUConfiguration::default(), config.cpu);
    }

    #[test]
    fn test_load_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("session.yaml");
        fs::write(
            &config_path,
            r#"
program: bin/countdown.bin
origin: 49152
max_cycles: 1000
cpu:
  start_address: 49152
  illegal_opcodes: false
"#,
        )
        .unwrap();

        let config = SessionConfig::load(&config_path).unwrap();
        assert_eq!(Some(dir.path().join("bin/countdown.bin")), config.program);
        assert_eq!(0xc000, config.origin);
        assert_eq!(Some(1000), config.max_cycles);
        assert_eq!(0xc000, config.cpu.start_address);
        assert!(!config.cpu.illegal_opcodes);
        assert!(config.cpu.decimal_mode);
    }

    #[test]
    fn test_start_address_follows_origin() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("origin.yaml");
        fs::write(&config_path, "program: prog.bin\norigin: 32768\n").unwrap();

        let config = SessionConfig::load(&config_path).unwrap();
        assert_eq!(0x8000, config.origin);
        assert_eq!(0x8000, config.cpu.start_address);
    }

    #[test]
    fn test_start_address_set_apart_from_origin() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("start.yaml");
        fs::write(
            &config_path,
            "origin: 32768\ncpu:\n  start_address: 32784\n",
        )
        .unwrap();

        let config = SessionConfig::load(&config_path).unwrap();
        assert_eq!(0x8000, config.origin);
        assert_eq!(0x8010, config.cpu.start_address);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("empty.yaml");
        fs::write(&config_path, "{}").unwrap();

        assert_eq!(SessionConfig::default(), SessionConfig::load(&config_path).unwrap());
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("broken.yaml");
        fs::write(&config_path, "origin: [not a number").unwrap();

        let error = SessionConfig::load(&config_path).unwrap_err();
        assert!(error.to_string().starts_with("Failed to parse YAML from"));
    }

    #[test]
    fn test_missing_config() {
        let error = SessionConfig::load(Path::new("/nonexistent/session.yaml")).unwrap_err();
        assert_eq!(
            "Could not read config file /nonexistent/session.yaml",
            error.to_string()
        );
    }
}
