//! Configuration types deserialized from `axigen.toml`.

use axigen_protocol::{InterfaceConfig, Role, Variant};
use serde::Deserialize;

/// The top-level configuration parsed from `axigen.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Project metadata.
    pub project: ProjectMeta,
    /// Interfaces to generate, in file order.
    #[serde(default, rename = "interface")]
    pub interfaces: Vec<InterfaceDef>,
}

impl ProjectConfig {
    /// Looks up an interface by name.
    pub fn interface(&self, name: &str) -> Option<&InterfaceDef> {
        self.interfaces.iter().find(|i| i.name == name)
    }
}

/// Project metadata from the `[project]` table.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
}

/// One `[[interface]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceDef {
    /// Unique name of this interface, used for selection and as a block header.
    pub name: String,
    /// AXI4-Lite or full AXI4.
    pub variant: Variant,
    /// Master or slave side.
    pub role: Role,
    /// Signal-name prefix.
    #[serde(default)]
    pub prefix: String,
    /// Address bus width in bits.
    pub addr_width: u32,
    /// Data bus width in bits.
    pub data_width: u32,
}

impl InterfaceDef {
    /// Converts this entry into a generator configuration.
    pub fn to_interface_config(&self) -> InterfaceConfig {
        InterfaceConfig::new(
            self.variant,
            self.role,
            self.prefix.clone(),
            self.addr_width,
            self.data_width,
        )
    }
}
