//! Interface roles and direction resolution.
//!
//! Every channel template is written in terms of two symbolic directions: the
//! signals this side receives and the signals it drives. [`resolve`] maps those
//! onto concrete [`PortDirection`]s for a [`Role`], so inverting the role flips
//! every port in the interface at once.

use axigen_ports::PortDirection;
use serde::{Deserialize, Serialize};

/// Which side of the bus connection is being described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The initiator, which issues address and write-data requests.
    Master,
    /// The responder, which answers requests.
    Slave,
}

impl Role {
    /// Returns `true` for [`Role::Master`].
    pub fn is_master(self) -> bool {
        self == Role::Master
    }

    /// Returns the role on the other end of the connection.
    pub fn opposite(self) -> Role {
        match self {
            Role::Master => Role::Slave,
            Role::Slave => Role::Master,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Master => f.write_str("master"),
            Role::Slave => f.write_str("slave"),
        }
    }
}

/// The two concrete directions used by every channel template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directions {
    /// Direction of the signals a master receives (e.g. `ready` on `AR`).
    pub recv: PortDirection,
    /// Direction of the signals a master drives (e.g. `valid` on `AR`).
    pub drive: PortDirection,
}

/// Resolves the receive/drive directions for `role`.
///
/// A master receives on inputs and drives on outputs; a slave is the mirror image.
pub fn resolve(role: Role) -> Directions {
    match role {
        Role::Master => Directions {
            recv: PortDirection::Input,
            drive: PortDirection::Output,
        },
        Role::Slave => Directions {
            recv: PortDirection::Output,
            drive: PortDirection::Input,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_directions() {
        let d = resolve(Role::Master);
        assert_eq!(d.recv, PortDirection::Input);
        assert_eq!(d.drive, PortDirection::Output);
    }

    #[test]
    fn slave_directions() {
        let d = resolve(Role::Slave);
        assert_eq!(d.recv, PortDirection::Output);
        assert_eq!(d.drive, PortDirection::Input);
    }

    #[test]
    fn opposite_roles_mirror() {
        for role in [Role::Master, Role::Slave] {
            let a = resolve(role);
            let b = resolve(role.opposite());
            assert_eq!(a.recv, b.recv.flip());
            assert_eq!(a.drive, b.drive.flip());
        }
    }

    #[test]
    fn is_master() {
        assert!(Role::Master.is_master());
        assert!(!Role::Slave.is_master());
    }

    #[test]
    fn role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Slave).unwrap(), "\"slave\"");
        let r: Role = serde_json::from_str("\"master\"").unwrap();
        assert_eq!(r, Role::Master);
    }

    #[test]
    fn display() {
        assert_eq!(Role::Master.to_string(), "master");
        assert_eq!(Role::Slave.to_string(), "slave");
    }
}
