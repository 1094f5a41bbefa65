//! Ordered port list builder.
//!
//! A [`PortList`] accumulates [`Port`] declarations in emission order. Order is
//! significant and duplicates are kept as-is. Vector ports whose width is zero are
//! never recorded, so a degenerate field (e.g. a byte strobe on a sub-byte data
//! bus) simply disappears from the rendered block.

use crate::direction::PortDirection;
use crate::port::Port;
use serde::{Deserialize, Serialize};

/// Separator placed between rendered port lines.
const LINE_SEPARATOR: &str = ",\n";

/// An ordered sequence of port declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortList {
    ports: Vec<Port>,
}

impl PortList {
    /// Creates an empty port list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every declaration.
    pub fn clear(&mut self) {
        self.ports.clear();
    }

    /// Appends a scalar (single-bit) port unconditionally.
    pub fn append_single(&mut self, direction: PortDirection, name: impl Into<String>) {
        self.ports.push(Port::scalar(direction, name));
    }

    /// Appends a vector port of `width` bits.
    ///
    /// Does nothing when `width` is zero.
    pub fn append_vector(&mut self, direction: PortDirection, name: impl Into<String>, width: u32) {
        if width > 0 {
            self.ports.push(Port::vector(direction, name, width));
        }
    }

    /// Returns the declarations in emission order.
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Returns the number of declarations.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Returns `true` if no ports have been declared.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Iterates over the declarations in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Port> {
        self.ports.iter()
    }

    /// Returns the first port called `name`, if any.
    pub fn find(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.name == name)
    }

    /// Renders the list as a port block: one line per port, joined with `",\n"`.
    ///
    /// There is no separator after the last line, and an empty list renders as an
    /// empty string.
    pub fn render(&self) -> String {
        self.ports
            .iter()
            .map(Port::render_line)
            .collect::<Vec<_>>()
            .join(LINE_SEPARATOR)
    }
}

impl std::fmt::Display for PortList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a> IntoIterator for &'a PortList {
    type Item = &'a Port;
    type IntoIter = std::slice::Iter<'a, Port>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let list = PortList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.render(), "");
    }

    #[test]
    fn append_single_always_recorded() {
        let mut list = PortList::new();
        list.append_single(PortDirection::Output, "valid");
        assert_eq!(list.len(), 1);
        assert!(list.ports()[0].is_scalar());
    }

    #[test]
    fn append_vector_drops_zero_width() {
        let mut list = PortList::new();
        list.append_vector(PortDirection::Output, "wstrb", 0);
        assert!(list.is_empty());
        list.append_vector(PortDirection::Output, "wstrb", 1);
        assert_eq!(list.len(), 1);
        assert_eq!(list.ports()[0].width, 1);
    }

    #[test]
    fn preserves_insertion_order_and_duplicates() {
        let mut list = PortList::new();
        list.append_single(PortDirection::Input, "b");
        list.append_single(PortDirection::Input, "a");
        list.append_single(PortDirection::Input, "b");
        let names: Vec<&str> = list.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "b"]);
    }

    #[test]
    fn clear_resets() {
        let mut list = PortList::new();
        list.append_single(PortDirection::Input, "x");
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn find_by_name() {
        let mut list = PortList::new();
        list.append_single(PortDirection::Input, "ready");
        list.append_vector(PortDirection::Output, "data", 16);
        assert_eq!(list.find("data").map(|p| p.width), Some(16));
        assert!(list.find("missing").is_none());
    }

    #[test]
    fn render_joins_without_trailing_separator() {
        let mut list = PortList::new();
        list.append_single(PortDirection::Output, "m_bready");
        list.append_vector(PortDirection::Input, "m_bresp", 2);
        assert_eq!(
            list.render(),
            "    output          m_bready,\n    input   [ 1:0]  m_bresp"
        );
    }

    #[test]
    fn render_is_stable() {
        let mut list = PortList::new();
        list.append_single(PortDirection::Input, "a");
        assert_eq!(list.render(), list.render());
        assert_eq!(format!("{list}"), list.render());
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut list = PortList::new();
        list.append_single(PortDirection::Input, "a");
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"direction":"input","width":0,"name":"a"}]"#);
    }
}
