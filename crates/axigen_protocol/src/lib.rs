//! AXI4 and AXI4-Lite interface port generation.
//!
//! Given a signal prefix and the address/data bus widths, this crate produces the
//! ordered [`PortList`](axigen_ports::PortList) describing one side (master or
//! slave) of an AXI4-Lite or full AXI4 connection. Each of the five channels
//! (`AR`, `R`, `AW`, `W`, `B`) appends a fixed template of signals; the role only
//! decides which of two directions every signal gets.

#![warn(missing_docs)]

pub mod channel;
pub mod error;
pub mod interface;
pub mod role;

pub use channel::Channel;
pub use error::ProtocolError;
pub use interface::{expected_port_count, generate, AxiInterface, InterfaceConfig, Variant};
pub use role::{resolve, Directions, Role};
