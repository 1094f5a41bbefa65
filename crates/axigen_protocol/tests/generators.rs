//! End-to-end tests for the four fixed-role AXI generators.
//!
//! These check the rendered port blocks line by line, the master/slave mirror
//! property, and the handling of degenerate widths.

use axigen_ports::PortDirection;
use axigen_protocol::{expected_port_count, AxiInterface, Role, Variant};

const LITE_MASTER_M_32_32: &str = "    output          m_arvalid,
    input           m_arready,
    output  [31:0]  m_araddr,
    output  [ 2:0]  m_arprot,
    input           m_rvalid,
    output          m_rready,
    input   [ 1:0]  m_rresp,
    input   [31:0]  m_rdata,
    output          m_awvalid,
    input           m_awready,
    output  [31:0]  m_awaddr,
    output  [ 2:0]  m_awprot,
    output          m_wvalid,
    input           m_wready,
    output  [31:0]  m_wdata,
    output  [ 3:0]  m_wstrb,
    input           m_bvalid,
    output          m_bready,
    input   [ 1:0]  m_bresp";

const FULL_SLAVE_S_32_16: &str = "    input           s_arvalid,
    output          s_arready,
    input   [31:0]  s_araddr,
    input   [ 2:0]  s_arprot,
    input   [ 7:0]  s_arlen,
    input   [ 2:0]  s_arsize,
    input   [ 1:0]  s_arburst,
    input   [ 0:0]  s_arlock,
    input   [ 3:0]  s_arcache,
    output          s_rvalid,
    input           s_rready,
    output  [ 1:0]  s_rresp,
    output  [15:0]  s_rdata,
    output          s_rlast,
    input           s_awvalid,
    output          s_awready,
    input   [31:0]  s_awaddr,
    input   [ 2:0]  s_awprot,
    input   [ 7:0]  s_awlen,
    input   [ 2:0]  s_awsize,
    input   [ 1:0]  s_awburst,
    input   [ 0:0]  s_awlock,
    input   [ 3:0]  s_awcache,
    input           s_wvalid,
    output          s_wready,
    input   [15:0]  s_wdata,
    input   [ 1:0]  s_wstrb,
    input           s_wlast,
    output          s_bvalid,
    input           s_bready,
    output  [ 1:0]  s_bresp";

fn all_generators(prefix: &str, addr_width: u32, data_width: u32) -> Vec<AxiInterface> {
    vec![
        AxiInterface::lite_master(prefix, addr_width, data_width),
        AxiInterface::lite_slave(prefix, addr_width, data_width),
        AxiInterface::full_master(prefix, addr_width, data_width),
        AxiInterface::full_slave(prefix, addr_width, data_width),
    ]
}

// ---------------------------------------------------------------------------
// Exact output
// ---------------------------------------------------------------------------

#[test]
fn lite_master_exact_output() {
    let iface = AxiInterface::lite_master("m_", 32, 32);
    assert_eq!(iface.render(), LITE_MASTER_M_32_32);
}

#[test]
fn full_slave_exact_output() {
    let iface = AxiInterface::full_slave("s_", 32, 16);
    assert_eq!(iface.render(), FULL_SLAVE_S_32_16);
}

#[test]
fn lite_master_first_lines() {
    let text = AxiInterface::lite_master("m_", 32, 32).render();
    let lines: Vec<&str> = text.lines().take(4).collect();
    assert_eq!(
        lines,
        vec![
            "    output          m_arvalid,",
            "    input           m_arready,",
            "    output  [31:0]  m_araddr,",
            "    output  [ 2:0]  m_arprot,",
        ]
    );
}

#[test]
fn no_trailing_separator() {
    for iface in all_generators("x_", 32, 32) {
        let text = iface.render();
        assert!(!text.ends_with(','));
        assert!(!text.ends_with('\n'));
        assert_eq!(text.matches(",\n").count(), iface.ports().len() - 1);
    }
}

// ---------------------------------------------------------------------------
// Idempotence and counts
// ---------------------------------------------------------------------------

#[test]
fn render_is_idempotent() {
    for iface in all_generators("p_", 40, 64) {
        assert_eq!(iface.render(), iface.render());
        assert_eq!(iface.clone().render(), iface.render());
    }
}

#[test]
fn port_counts_with_positive_widths() {
    for iface in all_generators("p_", 32, 32) {
        let expected = match iface.config().variant {
            Variant::Lite => 19,
            Variant::Full => 31,
        };
        assert_eq!(iface.ports().len(), expected);
    }
}

#[test]
fn full_adds_twelve_ports_over_lite() {
    for data_width in [1, 8, 32, 512] {
        let lite = AxiInterface::lite_master("", 32, data_width);
        let full = AxiInterface::full_master("", 32, data_width);
        assert_eq!(full.ports().len(), lite.ports().len() + 12);
    }
}

#[test]
fn counts_match_expected_port_count() {
    for (addr_width, data_width) in [(32, 32), (0, 32), (32, 0), (12, 4), (64, 1024)] {
        for iface in all_generators("", addr_width, data_width) {
            assert_eq!(
                iface.ports().len(),
                expected_port_count(iface.config().variant, addr_width, data_width)
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Role inversion
// ---------------------------------------------------------------------------

#[test]
fn master_and_slave_are_mirror_images() {
    let pairs = [
        (
            AxiInterface::lite_master("a_", 24, 64),
            AxiInterface::lite_slave("a_", 24, 64),
        ),
        (
            AxiInterface::full_master("a_", 24, 64),
            AxiInterface::full_slave("a_", 24, 64),
        ),
    ];
    for (master, slave) in pairs {
        assert_eq!(master.ports().len(), slave.ports().len());
        for (m, s) in master.iter().zip(slave.iter()) {
            assert_eq!(m.name, s.name);
            assert_eq!(m.width, s.width);
            assert_eq!(m.direction, s.direction.flip());
        }
    }
}

#[test]
fn master_drives_valid_on_request_channels() {
    let iface = AxiInterface::full_master("m_", 32, 32);
    for name in ["m_arvalid", "m_awvalid", "m_wvalid", "m_rready", "m_bready"] {
        assert_eq!(
            iface.ports().find(name).map(|p| p.direction),
            Some(PortDirection::Output),
            "{name}"
        );
    }
    assert_eq!(iface.config().role, Role::Master);
}

// ---------------------------------------------------------------------------
// Degenerate widths
// ---------------------------------------------------------------------------

#[test]
fn sub_byte_data_width_drops_strobe() {
    for data_width in 1..8 {
        for iface in all_generators("m_", 32, data_width) {
            assert!(iface.ports().find("m_wstrb").is_none());
            assert!(!iface.render().contains("wstrb"));
            assert!(iface.ports().find("m_wdata").is_some());
        }
    }
}

#[test]
fn zero_widths_drop_bus_vectors() {
    let iface = AxiInterface::lite_master("", 0, 0);
    for name in ["araddr", "awaddr", "rdata", "wdata", "wstrb"] {
        assert!(iface.ports().find(name).is_none(), "{name}");
    }
    assert_eq!(iface.ports().len(), 14);
}

#[test]
fn empty_prefix_uses_bare_names() {
    let iface = AxiInterface::lite_slave("", 32, 32);
    assert_eq!(iface.ports().ports()[0].name, "arvalid");
}

#[test]
fn full_slave_rlast_follows_read_data() {
    let iface = AxiInterface::full_slave("", 32, 16);
    let names: Vec<&str> = iface.iter().map(|p| p.name.as_str()).collect();
    let rdata = names.iter().position(|n| *n == "rdata").unwrap();
    assert_eq!(names[rdata + 1], "rlast");
    let rlast = &iface.ports().ports()[rdata + 1];
    assert!(rlast.is_scalar());
    assert_eq!(rlast.direction, PortDirection::Output);

    let wstrb = names.iter().position(|n| *n == "wstrb").unwrap();
    let wlast = names.iter().position(|n| *n == "wlast").unwrap();
    assert!(wstrb < wlast);
    assert_eq!(iface.ports().ports()[wstrb].width, 2);
}
