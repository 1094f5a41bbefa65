//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use log::debug;
use std::collections::BTreeSet;
use std::path::Path;

/// Name of the configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "axigen.toml";

/// Loads and validates `<project_dir>/axigen.toml`.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    load_config_file(&project_dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    debug!("loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates an `axigen.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    debug!(
        "project '{}' declares {} interface(s)",
        config.project.name,
        config.interfaces.len()
    );
    Ok(config)
}

/// Validates required fields, interface name uniqueness, and bus widths.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    let mut seen = BTreeSet::new();
    for (i, iface) in config.interfaces.iter().enumerate() {
        if iface.name.is_empty() {
            return Err(ConfigError::MissingField(format!("interface[{i}].name")));
        }
        if !seen.insert(iface.name.as_str()) {
            return Err(ConfigError::DuplicateInterface(iface.name.clone()));
        }
        iface
            .to_interface_config()
            .validate()
            .map_err(|e| ConfigError::ValidationError(format!("interface '{}': {e}", iface.name)))?;
    }
    Ok(())
}
