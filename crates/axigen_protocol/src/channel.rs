//! Per-channel signal templates.
//!
//! Each AXI channel appends a fixed, ordered set of signals. The AXI4-Lite
//! template is the base; the full AXI4 template runs the Lite one and then
//! appends the burst fields (address channels) or the `last` beat marker (data
//! channels).

use crate::interface::InterfaceConfig;
use crate::role::{resolve, Directions};
use axigen_ports::{PortDirection, PortList};

/// Width of the `AxPROT` protection field.
const PROT_WIDTH: u32 = 3;
/// Width of the `RRESP`/`BRESP` response field.
const RESP_WIDTH: u32 = 2;
/// Width of the `AxLEN` burst length field.
const LEN_WIDTH: u32 = 8;
/// Width of the `AxSIZE` beat size field.
const SIZE_WIDTH: u32 = 3;
/// Width of the `AxBURST` burst type field.
const BURST_WIDTH: u32 = 2;
/// Width of the `AxLOCK` field.
const LOCK_WIDTH: u32 = 1;
/// Width of the `AxCACHE` field.
const CACHE_WIDTH: u32 = 4;

/// One of the five AXI channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Read address.
    Ar,
    /// Read data.
    R,
    /// Write address.
    Aw,
    /// Write data.
    W,
    /// Write response.
    B,
}

impl Channel {
    /// All channels in the order their signals are emitted.
    pub const ALL: [Channel; 5] = [Channel::Ar, Channel::R, Channel::Aw, Channel::W, Channel::B];

    /// Returns the signal-name stem of this channel (`"ar"`, `"r"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Channel::Ar => "ar",
            Channel::R => "r",
            Channel::Aw => "aw",
            Channel::W => "w",
            Channel::B => "b",
        }
    }

    /// Appends this channel's AXI4-Lite signals to `list`.
    pub fn assemble_lite(self, list: &mut PortList, config: &InterfaceConfig) {
        let mut e = Emitter::new(list, config, self);
        let (recv, drive) = (e.dirs.recv, e.dirs.drive);
        match self {
            Channel::Ar | Channel::Aw => {
                e.single(drive, "valid");
                e.single(recv, "ready");
                e.vector(drive, "addr", config.addr_width);
                e.vector(drive, "prot", PROT_WIDTH);
            }
            Channel::R => {
                e.single(recv, "valid");
                e.single(drive, "ready");
                e.vector(recv, "resp", RESP_WIDTH);
                e.vector(recv, "data", config.data_width);
            }
            Channel::W => {
                e.single(drive, "valid");
                e.single(recv, "ready");
                e.vector(drive, "data", config.data_width);
                e.vector(drive, "strb", config.strobe_width());
            }
            Channel::B => {
                e.single(recv, "valid");
                e.single(drive, "ready");
                e.vector(recv, "resp", RESP_WIDTH);
            }
        }
    }

    /// Appends this channel's full AXI4 signals to `list`.
    pub fn assemble_full(self, list: &mut PortList, config: &InterfaceConfig) {
        self.assemble_lite(list, config);
        let mut e = Emitter::new(list, config, self);
        let (recv, drive) = (e.dirs.recv, e.dirs.drive);
        match self {
            Channel::Ar | Channel::Aw => {
                e.vector(drive, "len", LEN_WIDTH);
                e.vector(drive, "size", SIZE_WIDTH);
                e.vector(drive, "burst", BURST_WIDTH);
                e.vector(drive, "lock", LOCK_WIDTH);
                e.vector(drive, "cache", CACHE_WIDTH);
            }
            Channel::R => e.single(recv, "last"),
            Channel::W => e.single(drive, "last"),
            Channel::B => {}
        }
    }
}

/// Appends prefixed, channel-qualified signals to a port list.
struct Emitter<'a> {
    list: &'a mut PortList,
    prefix: &'a str,
    channel: Channel,
    dirs: Directions,
}

impl<'a> Emitter<'a> {
    fn new(list: &'a mut PortList, config: &'a InterfaceConfig, channel: Channel) -> Self {
        Self {
            list,
            prefix: &config.prefix,
            channel,
            dirs: resolve(config.role),
        }
    }

    fn signal_name(&self, field: &str) -> String {
        format!("{}{}{}", self.prefix, self.channel.name(), field)
    }

    fn single(&mut self, direction: PortDirection, field: &str) {
        let name = self.signal_name(field);
        self.list.append_single(direction, name);
    }

    fn vector(&mut self, direction: PortDirection, field: &str, width: u32) {
        let name = self.signal_name(field);
        self.list.append_vector(direction, name, width);
    }
}
