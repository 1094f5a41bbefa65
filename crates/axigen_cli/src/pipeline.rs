//! Shared helpers for CLI commands.
//!
//! Contains project root resolution, interface rendering in the supported output
//! formats, and the final write to stdout or a file.

use std::path::{Path, PathBuf};

use axigen_config::CONFIG_FILE_NAME;
use axigen_ports::PortList;
use axigen_protocol::{AxiInterface, InterfaceConfig};
use serde::Serialize;

use crate::GlobalArgs;

/// Serialized form of one generated interface.
#[derive(Debug, Serialize)]
pub struct InterfaceReport<'a> {
    /// Interface or module name, when one is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    /// The configuration the ports were generated from.
    #[serde(flatten)]
    pub config: &'a InterfaceConfig,
    /// The generated ports, in emission order.
    pub ports: &'a PortList,
}

impl<'a> InterfaceReport<'a> {
    /// Builds a report for `iface`.
    pub fn new(name: Option<&'a str>, iface: &'a AxiInterface) -> Self {
        Self {
            name,
            config: iface.config(),
            ports: iface.ports(),
        }
    }
}

/// Walks up from `start` looking for the nearest directory containing `axigen.toml`.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE_NAME).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find {CONFIG_FILE_NAME} in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the configuration file path from global CLI args.
///
/// If `--config` is specified, uses that path (directory → `<dir>/axigen.toml`).
/// Otherwise walks up from the current directory looking for `axigen.toml`.
pub fn resolve_config_path(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_dir() {
            Ok(p.join(CONFIG_FILE_NAME))
        } else {
            Ok(p)
        }
    } else {
        let root = find_project_root(&std::env::current_dir()?)?;
        Ok(root.join(CONFIG_FILE_NAME))
    }
}

/// Wraps a rendered port block in an empty Verilog module declaration.
pub fn wrap_module(name: &str, block: &str) -> String {
    if block.is_empty() {
        return format!("module {name} ();\n\nendmodule\n");
    }
    format!("module {name} (\n{block}\n);\n\nendmodule\n")
}

/// Renders a block preceded by a `// <name>: <variant> <role>` header comment.
pub fn with_header(name: &str, iface: &AxiInterface) -> String {
    let config = iface.config();
    format!(
        "// {name}: {} {}, addr {} bits, data {} bits\n{}",
        config.variant,
        config.role,
        config.addr_width,
        config.data_width,
        iface.render()
    )
}

/// Writes `content` to `output` if given, otherwise to stdout.
pub fn emit(content: &str, output: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            log::info!("wrote {path}");
        }
        None => print!("{content}"),
    }
    Ok(())
}
