//! Port declarations and ordered port lists for module interfaces.
//!
//! This crate provides the atomic [`Port`] record, its [`PortDirection`], and the
//! [`PortList`] builder that accumulates declarations in emission order and renders
//! them as a comma-separated Verilog port block.

#![warn(missing_docs)]

pub mod direction;
pub mod port;
pub mod port_list;

pub use direction::PortDirection;
pub use port::Port;
pub use port_list::PortList;
