//! `axigen gen` — generate a single interface from command-line options.

use axigen_protocol::{AxiInterface, InterfaceConfig};

use crate::pipeline::{emit, wrap_module, InterfaceReport};
use crate::{GenArgs, GlobalArgs, ReportFormat};

/// Runs the `axigen gen` command.
///
/// Validates the widths, generates the interface, and writes it in the requested
/// format. Returns exit code 0 on success.
pub fn run(args: &GenArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = InterfaceConfig::new(
        args.variant.into(),
        args.role.into(),
        args.prefix.clone(),
        args.addr_width,
        args.data_width,
    );
    config.validate()?;

    if !global.quiet {
        eprintln!("  Generating {} {} interface", config.variant, config.role);
    }

    let iface = AxiInterface::new(config);
    let content = render(&iface, args)?;
    emit(&content, args.output.as_deref())?;
    Ok(0)
}

/// Renders `iface` according to the format and module options in `args`.
fn render(iface: &AxiInterface, args: &GenArgs) -> Result<String, Box<dyn std::error::Error>> {
    match args.format {
        ReportFormat::Text => Ok(match args.module.as_deref() {
            Some(name) => wrap_module(name, &iface.render()),
            None => format!("{iface}\n"),
        }),
        ReportFormat::Json => {
            let report = InterfaceReport::new(args.module.as_deref(), iface);
            Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
        }
    }
}
