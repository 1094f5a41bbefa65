//! Interface configuration and the AXI port generators.
//!
//! [`generate`] is the pure entry point: it turns an [`InterfaceConfig`] into a
//! freshly built [`PortList`]. [`AxiInterface`] wraps a configuration together
//! with its generated list, and provides the four fixed-role constructors.

use crate::channel::Channel;
use crate::error::ProtocolError;
use crate::role::Role;
use axigen_ports::{Port, PortList};
use log::debug;
use serde::{Deserialize, Serialize};

/// Bits per byte lane of the write strobe.
const BITS_PER_STROBE: u32 = 8;

/// Which channel template set to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// AXI4-Lite: no burst fields and no `last` beat markers.
    Lite,
    /// Full AXI4: Lite plus `len`/`size`/`burst`/`lock`/`cache` and `last`.
    Full,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Lite => f.write_str("lite"),
            Variant::Full => f.write_str("full"),
        }
    }
}

/// The fixed configuration of one side of an AXI interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceConfig {
    /// Channel template set.
    pub variant: Variant,
    /// Master or slave side.
    pub role: Role,
    /// String prepended to every signal name.
    pub prefix: String,
    /// Address bus width in bits.
    pub addr_width: u32,
    /// Data bus width in bits.
    pub data_width: u32,
}

impl InterfaceConfig {
    /// Creates a new interface configuration.
    pub fn new(
        variant: Variant,
        role: Role,
        prefix: impl Into<String>,
        addr_width: u32,
        data_width: u32,
    ) -> Self {
        Self {
            variant,
            role,
            prefix: prefix.into(),
            addr_width,
            data_width,
        }
    }

    /// Width of the write strobe: one bit per whole byte of data.
    pub fn strobe_width(&self) -> u32 {
        self.data_width / BITS_PER_STROBE
    }

    /// Rejects configurations with a zero-width address or data bus.
    ///
    /// Generation accepts such configurations and simply omits the empty vectors;
    /// this check is for callers that want to refuse them up front.
    pub fn validate(&self) -> Result<(), ProtocolError> {
        if self.addr_width == 0 {
            return Err(ProtocolError::ZeroAddressWidth);
        }
        if self.data_width == 0 {
            return Err(ProtocolError::ZeroDataWidth);
        }
        Ok(())
    }
}

/// Builds the port list described by `config`.
pub fn generate(config: &InterfaceConfig) -> PortList {
    let mut list = PortList::new();
    generate_into(&mut list, config);
    list
}

/// Clears `list` and rebuilds it from `config`.
fn generate_into(list: &mut PortList, config: &InterfaceConfig) {
    list.clear();
    for channel in Channel::ALL {
        match config.variant {
            Variant::Lite => channel.assemble_lite(list, config),
            Variant::Full => channel.assemble_full(list, config),
        }
    }
    debug!(
        "generated {} {} interface '{}' ({} ports, addr {} bits, data {} bits)",
        config.variant,
        config.role,
        config.prefix,
        list.len(),
        config.addr_width,
        config.data_width
    );
}

/// Number of ports [`generate`] emits for the given variant and widths.
pub fn expected_port_count(variant: Variant, addr_width: u32, data_width: u32) -> usize {
    let present = |width: u32| usize::from(width > 0);
    // valid/ready on every channel, prot on AR/AW, resp on R/B
    let mut count = 5 * 2 + 2 + 2;
    count += 2 * present(addr_width);
    count += 2 * present(data_width);
    count += present(data_width / BITS_PER_STROBE);
    if variant == Variant::Full {
        // len/size/burst/lock/cache on AR/AW, last on R/W
        count += 2 * 5 + 2;
    }
    count
}

/// One generated side of an AXI interface.
///
/// The port list is built once on construction and is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxiInterface {
    config: InterfaceConfig,
    ports: PortList,
}

impl AxiInterface {
    /// Generates the interface described by `config`.
    pub fn new(config: InterfaceConfig) -> Self {
        let mut iface = Self {
            config,
            ports: PortList::new(),
        };
        iface.regenerate();
        iface
    }

    /// AXI4-Lite master side.
    pub fn lite_master(prefix: impl Into<String>, addr_width: u32, data_width: u32) -> Self {
        Self::new(InterfaceConfig::new(
            Variant::Lite,
            Role::Master,
            prefix,
            addr_width,
            data_width,
        ))
    }

    /// AXI4-Lite slave side.
    pub fn lite_slave(prefix: impl Into<String>, addr_width: u32, data_width: u32) -> Self {
        Self::new(InterfaceConfig::new(
            Variant::Lite,
            Role::Slave,
            prefix,
            addr_width,
            data_width,
        ))
    }

    /// Full AXI4 master side.
    pub fn full_master(prefix: impl Into<String>, addr_width: u32, data_width: u32) -> Self {
        Self::new(InterfaceConfig::new(
            Variant::Full,
            Role::Master,
            prefix,
            addr_width,
            data_width,
        ))
    }

    /// Full AXI4 slave side.
    pub fn full_slave(prefix: impl Into<String>, addr_width: u32, data_width: u32) -> Self {
        Self::new(InterfaceConfig::new(
            Variant::Full,
            Role::Slave,
            prefix,
            addr_width,
            data_width,
        ))
    }

    fn regenerate(&mut self) {
        generate_into(&mut self.ports, &self.config);
    }

    /// The configuration this interface was generated from.
    pub fn config(&self) -> &InterfaceConfig {
        &self.config
    }

    /// The generated port list.
    pub fn ports(&self) -> &PortList {
        &self.ports
    }

    /// Iterates over the generated ports.
    pub fn iter(&self) -> std::slice::Iter<'_, Port> {
        self.ports.iter()
    }

    /// Renders the port block.
    pub fn render(&self) -> String {
        self.ports.render()
    }
}

impl std::fmt::Display for AxiInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.ports, f)
    }
}
