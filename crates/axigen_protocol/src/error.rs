//! Error types for interface configuration validation.

/// Errors reported by [`InterfaceConfig::validate`](crate::InterfaceConfig::validate).
///
/// Port generation itself never fails; these only arise when a caller opts into
/// validation before generating.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// The address bus was configured with zero bits.
    #[error("address width must be at least 1 bit")]
    ZeroAddressWidth,

    /// The data bus was configured with zero bits.
    #[error("data width must be at least 1 bit")]
    ZeroDataWidth,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_zero_address_width() {
        assert_eq!(
            format!("{}", ProtocolError::ZeroAddressWidth),
            "address width must be at least 1 bit"
        );
    }

    #[test]
    fn display_zero_data_width() {
        assert_eq!(
            format!("{}", ProtocolError::ZeroDataWidth),
            "data width must be at least 1 bit"
        );
    }
}
