//! `axigen build` — generate every interface declared in `axigen.toml`.
//!
//! 1. Resolve the configuration file (`--config` or walk up from the cwd)
//! 2. Load and validate it via `axigen_config`
//! 3. Select interfaces (`--only`)
//! 4. Generate and render each one
//! 5. Write the combined output

use axigen_config::{ConfigError, InterfaceDef, ProjectConfig};
use axigen_protocol::AxiInterface;

use crate::pipeline::{emit, resolve_config_path, with_header, InterfaceReport};
use crate::{BuildArgs, GlobalArgs, ReportFormat};

/// Runs the `axigen build` command.
///
/// Returns exit code 0 on success.
pub fn run(args: &BuildArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config_path = resolve_config_path(global)?;
    let config = axigen_config::load_config_file(&config_path)?;

    let selected = select_interfaces(&config, &args.only)?;

    if !global.quiet {
        eprintln!(
            "  Generating {} ({} interface(s))",
            config.project.name,
            selected.len()
        );
    }

    let generated: Vec<(&InterfaceDef, AxiInterface)> = selected
        .into_iter()
        .map(|def| (def, AxiInterface::new(def.to_interface_config())))
        .collect();

    let content = render(&generated, args.format)?;
    emit(&content, args.output.as_deref())?;
    Ok(0)
}

/// Picks the interfaces named in `only`, or all of them when `only` is empty.
///
/// Selected interfaces keep their configuration file order.
fn select_interfaces<'a>(
    config: &'a ProjectConfig,
    only: &[String],
) -> Result<Vec<&'a InterfaceDef>, ConfigError> {
    if only.is_empty() {
        return Ok(config.interfaces.iter().collect());
    }
    if let Some(missing) = only.iter().find(|name| config.interface(name).is_none()) {
        return Err(ConfigError::UnknownInterface(missing.clone()));
    }
    Ok(config
        .interfaces
        .iter()
        .filter(|def| only.contains(&def.name))
        .collect())
}

/// Renders all generated interfaces in `format`.
fn render(
    generated: &[(&InterfaceDef, AxiInterface)],
    format: ReportFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        ReportFormat::Text => {
            let blocks: Vec<String> = generated
                .iter()
                .map(|(def, iface)| with_header(&def.name, iface))
                .collect();
            if blocks.is_empty() {
                Ok(String::new())
            } else {
                Ok(format!("{}\n", blocks.join("\n\n")))
            }
        }
        ReportFormat::Json => {
            let reports: Vec<InterfaceReport<'_>> = generated
                .iter()
                .map(|(def, iface)| InterfaceReport::new(Some(def.name.as_str()), iface))
                .collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&reports)?))
        }
    }
}
