//! axigen CLI — generates AXI4 and AXI4-Lite port declaration blocks.
//!
//! Provides `axigen gen` for a single interface described on the command line and
//! `axigen build` for every interface listed in an `axigen.toml` project file.

#![warn(missing_docs)]

mod build;
mod generate;
mod pipeline;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// axigen — AXI interface port list generator.
#[derive(Parser, Debug)]
#[command(name = "axigen", version, about = "AXI interface port list generator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `axigen.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one interface from command-line options.
    Gen(GenArgs),
    /// Generate every interface listed in `axigen.toml`.
    Build(BuildArgs),
}

/// Arguments for the `axigen gen` subcommand.
#[derive(Parser, Debug)]
pub struct GenArgs {
    /// Channel template set.
    #[arg(long, value_enum, default_value_t = CliVariant::Lite)]
    pub variant: CliVariant,

    /// Which side of the connection to describe.
    #[arg(long, value_enum, default_value_t = CliRole::Master)]
    pub role: CliRole,

    /// String prepended to every signal name.
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Address bus width in bits.
    #[arg(short, long, default_value_t = 32)]
    pub addr_width: u32,

    /// Data bus width in bits.
    #[arg(short, long, default_value_t = 32)]
    pub data_width: u32,

    /// Wrap the port block in a module declaration with this name.
    #[arg(short, long)]
    pub module: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the `axigen build` subcommand.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Only generate the named interfaces.
    #[arg(long, num_args = 1..)]
    pub only: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// AXI variant selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliVariant {
    /// AXI4-Lite.
    Lite,
    /// Full AXI4.
    Full,
}

impl From<CliVariant> for axigen_protocol::Variant {
    fn from(v: CliVariant) -> Self {
        match v {
            CliVariant::Lite => axigen_protocol::Variant::Lite,
            CliVariant::Full => axigen_protocol::Variant::Full,
        }
    }
}

/// Interface role selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliRole {
    /// Initiator side.
    Master,
    /// Responder side.
    Slave,
}

impl From<CliRole> for axigen_protocol::Role {
    fn from(r: CliRole) -> Self {
        match r {
            CliRole::Master => axigen_protocol::Role::Master,
            CliRole::Slave => axigen_protocol::Role::Slave,
        }
    }
}

/// Output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Verilog port declarations.
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

impl GlobalArgs {
    /// Log level implied by `--quiet` and `--verbose`.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    env_logger::Builder::from_default_env()
        .filter_level(global.log_level())
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Command::Gen(ref args) => generate::run(args, &global),
        Command::Build(ref args) => build::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
