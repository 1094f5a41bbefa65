//! A single port declaration.
//!
//! A [`Port`] is one line of a port block: a direction, a bit width, and a name.
//! Width `0` marks a scalar (single-bit) signal that is rendered without a bit
//! range; any positive width is a vector declared as `[width-1:0]`.

use crate::direction::PortDirection;
use serde::{Deserialize, Serialize};

/// Indentation emitted before every port line.
const INDENT: &str = "    ";

/// Width of the direction keyword column.
const DIRECTION_FIELD: usize = 8;

/// Blank bit-range column used for scalar ports.
const SCALAR_RANGE_FIELD: &str = "        ";

/// A port declaration in an interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Port {
    /// The direction of data flow relative to this side of the interface.
    pub direction: PortDirection,
    /// Bit width, or `0` for a scalar signal.
    pub width: u32,
    /// The full (prefixed) signal name.
    pub name: String,
}

impl Port {
    /// Creates a scalar (single-bit) port.
    pub fn scalar(direction: PortDirection, name: impl Into<String>) -> Self {
        Self {
            direction,
            width: 0,
            name: name.into(),
        }
    }

    /// Creates a vector port of `width` bits.
    pub fn vector(direction: PortDirection, name: impl Into<String>, width: u32) -> Self {
        Self {
            direction,
            width,
            name: name.into(),
        }
    }

    /// Returns `true` if this port is declared without a bit range.
    pub fn is_scalar(&self) -> bool {
        self.width == 0
    }

    /// Returns the `(msb, lsb)` bit range of a vector port, or `None` for scalars.
    pub fn range(&self) -> Option<(u32, u32)> {
        if self.width > 0 {
            Some((self.width - 1, 0))
        } else {
            None
        }
    }

    /// Renders this port as one line of a port block, without a trailing separator.
    ///
    /// The line is a four-space indent, the direction keyword padded to eight
    /// columns, the bit range (`[msb:0]` with `msb` right-aligned in two columns,
    /// followed by two spaces) or eight blanks, and the name.
    pub fn render_line(&self) -> String {
        let range = match self.range() {
            Some((msb, lsb)) => format!("[{msb:2}:{lsb}]  "),
            None => SCALAR_RANGE_FIELD.to_string(),
        };
        format!(
            "{INDENT}{:<width$}{range}{}",
            self.direction.keyword(),
            self.name,
            width = DIRECTION_FIELD
        )
    }
}

impl std::fmt::Display for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_line())
    }
}
