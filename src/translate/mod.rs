//! Translation of Ixia statistics views to the telemetry device tree.
//!
//! The input is assumed to be of the form
//!
//! ```text
//! {
//!     "Port Statistics": [
//!         { "Port Name": "ixia2/port1", "Bytes Rx.": "10", ... },
//!         { "Port Name": "ixia2/port2", "Bytes Rx.": "20", ... },
//!     ],
//!     "Flow Statistics": [
//!         ...
//!     ],
//! }
//! ```
//!
//! where each entry under a view is a row of that view. Each known view is
//! translated to its own partial [`Device`], and the partial devices are
//! merged into the result. A view that fails to translate or merge is
//! logged and left out; it never fails the whole translation.

use crate::error::Error;
use crate::stats::{FlowStats, Table, View};
use crate::telemetry::{Device, IngressTrackingKey, MplsLabel};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering::SeqCst};
use tracing::{debug, error, info, warn};

pub(crate) mod egress;
pub(crate) mod flow;
pub(crate) mod port;
pub(crate) mod port_cpu;

type TranslateFn = fn(&Table, &HashSet<String>) -> Result<Device, Error>;

// Rendering devices to JSON is expensive, so this is only meant for development.
static DEBUG_LOG: AtomicBool = AtomicBool::new(false);

/// Enable or disable logging of the translated devices as JSON.
pub fn set_debug_log(enabled: bool) {
    DEBUG_LOG.store(enabled, SeqCst);
}

pub fn debug_log_enabled() -> bool {
    DEBUG_LOG.load(SeqCst)
}

/// Translate Ixia statistics tables to a telemetry device.
///
/// `ingress_tracked_flows` names the traffic items that have ingress tracking
/// enabled; their statistics are placed under the flow's ingress tracking
/// entries rather than on the flow itself.
pub fn translate(views: &HashMap<View, Table>, ingress_tracked_flows: &HashSet<String>) -> Device {
    let mut root = Device::new();
    for (view, table) in views.iter() {
        let translate_view = match translator(view) {
            Some(f) => f,
            None => {
                debug!("Skipping unknown statistics view {:?}", view.to_string());
                continue;
            }
        };

        let d = match translate_view(table, ingress_tracked_flows) {
            Ok(d) => d,
            Err(e) => {
                warn!("Got error: {} while translating {}", e, view);
                continue;
            }
        };
        if debug_log_enabled() {
            info!("{} device, {}", view, json_debug(&d));
        }

        if let Err(e) = merge_view(&mut root, d) {
            warn!("Got error: {} while merging {}", e, view);
        }
    }

    if debug_log_enabled() {
        info!("merged processed device, {}", json_debug(&root));
    }

    root
}

/// Merge `d` into `root`, leaving `root` untouched if the merge fails.
fn merge_view(root: &mut Device, d: Device) -> Result<(), Error> {
    let mut merged = root.clone();
    merged.merge(d)?;
    *root = merged;
    Ok(())
}

fn translator(view: &View) -> Option<TranslateFn> {
    match view {
        View::PortStats => Some(port::translate_port_stats),
        View::PortCpuStats => Some(port_cpu::translate_port_cpu_stats),
        View::FlowStats => Some(flow::translate_flow_stats),
        View::EgressStats => Some(egress::translate_egress_stats),
        View::Other(_) => None,
    }
}

/// Strip the Ixia chassis name off a `[ixia_name]/[port_name]` port name.
pub fn short_port_name(full_port_name: &str) -> Result<&str, Error> {
    match full_port_name.split_once('/') {
        Some((_, short)) if !short.is_empty() => Ok(short),
        _ => Err(Error::MalformedPortName(full_port_name.to_owned())),
    }
}

/// Map an Ixia MPLS label value to a label, recognising the reserved values.
pub fn mpls_label_from_uint(label: Option<u64>) -> MplsLabel {
    match label {
        None => MplsLabel::NoLabel,
        Some(0) => MplsLabel::Ipv4ExplicitNull,
        Some(1) => MplsLabel::RouterAlert,
        Some(2) => MplsLabel::Ipv6ExplicitNull,
        Some(3) => MplsLabel::ImplicitNull,
        Some(7) => MplsLabel::EntropyLabelIndicator,
        Some(v) => u32::try_from(v)
            .map(MplsLabel::Value)
            .unwrap_or(MplsLabel::Unset),
    }
}

pub(crate) fn ingress_tracking_key(row: &FlowStats) -> IngressTrackingKey {
    IngressTrackingKey {
        src_port: row.rx_port.clone(),
        dst_port: row.tx_port.clone(),
        mpls_label: mpls_label_from_uint(row.mpls_label),
        src_ipv4: row.src_ipv4.clone(),
        dst_ipv4: row.dst_ipv4.clone(),
        src_ipv6: row.src_ipv6.clone(),
        dst_ipv6: row.dst_ipv6.clone(),
    }
}

/// Render a device to indented JSON so that it can be logged.
///
/// Only used for debugging, so a failure is logged and a placeholder
/// returned instead.
pub fn json_debug(d: &Device) -> String {
    match serde_json::to_string_pretty(d) {
        Ok(js) => js,
        Err(e) => {
            error!("cannot render device to JSON during debugging, {}", e);
            "(unrenderable)".to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Row;
    use crate::telemetry::{ComponentType, InterfaceType};
    use pretty_assertions::assert_eq;

    fn views<const N: usize>(tables: [(View, Vec<Row>); N]) -> HashMap<View, Table> {
        tables
            .into_iter()
            .map(|(v, rows)| (v, Table::from(rows)))
            .collect()
    }

    fn port_with_cpu(d: &mut Device, port: &str, load: Option<u8>) {
        let cpu_name = format!("{port}_CPU");
        let p = d.get_or_create_component(port);
        p.component_type = Some(ComponentType::Port);
        p.add_subcomponent(&cpu_name);
        let c = d.get_or_create_component(&cpu_name);
        c.component_type = Some(ComponentType::Cpu);
        c.parent = Some(port.to_owned());
        c.cpu.utilization.instant = load;
    }

    #[test]
    fn single_view() {
        let got = translate(
            &views([(
                View::PortCpuStats,
                vec![Row::from([
                    ("Port Name", "ixia2/port1"),
                    ("Total Memory(KB)", "420"),
                    ("Free Memory(KB)", "100"),
                    ("%CPU Load", "100"),
                ])],
            )]),
            &HashSet::new(),
        );

        let mut want = Device::new();
        port_with_cpu(&mut want, "port1", Some(100));
        let m = &mut want.get_or_create_component("port1").memory;
        m.available = Some(100);
        m.utilized = Some(320);
        assert_eq!(got, want);
    }

    #[test]
    fn unknown_view_is_ignored() {
        let got = translate(
            &views([
                (
                    View::PortCpuStats,
                    vec![Row::from([("Port Name", "ixia2/port1"), ("%CPU Load", "100")])],
                ),
                (
                    View::from("Some Unknown View"),
                    vec![Row::from([("Colour", "burnt-umber")])],
                ),
            ]),
            &HashSet::new(),
        );

        let mut want = Device::new();
        port_with_cpu(&mut want, "port1", Some(100));
        assert_eq!(got, want);
    }

    #[test]
    fn invalid_view_is_skipped() {
        let got = translate(
            &views([(View::PortCpuStats, vec![Row::from([("%CPU Load", "42")])])]),
            &HashSet::new(),
        );
        assert!(got.is_empty());
    }

    #[test]
    fn invalid_view_beside_valid_view() {
        let got = translate(
            &views([
                (View::PortCpuStats, vec![Row::from([("%CPU Load", "42")])]),
                (
                    View::PortStats,
                    vec![Row::from([("Port Name", "ixia2/port1"), ("Bytes Rx.", "10")])],
                ),
            ]),
            &HashSet::new(),
        );

        let mut want = Device::new();
        let i = want.get_or_create_interface("port1");
        i.interface_type = Some(InterfaceType::EthernetCsmacd);
        i.counters.in_octets = Some(10);
        assert_eq!(got, want);
    }

    #[test]
    fn multiple_views() {
        let got = translate(
            &views([
                (
                    View::PortCpuStats,
                    vec![Row::from([("Port Name", "ixia2/port1"), ("%CPU Load", "100")])],
                ),
                (
                    View::PortStats,
                    vec![Row::from([
                        ("Port Name", "ixia2/port1"),
                        ("Bytes Rx.", "10"),
                        ("Bytes Tx.", "20"),
                    ])],
                ),
            ]),
            &HashSet::new(),
        );

        let mut want = Device::new();
        port_with_cpu(&mut want, "port1", Some(100));
        let i = want.get_or_create_interface("port1");
        i.interface_type = Some(InterfaceType::EthernetCsmacd);
        i.counters.in_octets = Some(10);
        i.counters.out_octets = Some(20);
        assert_eq!(got, want);
    }

    #[test]
    fn flow_and_egress_views_combine() {
        let tracked = HashSet::from(["traffic1".to_owned()]);
        let got = translate(
            &views([
                (
                    View::FlowStats,
                    vec![Row::from([
                        ("Traffic Item", "traffic1"),
                        ("Rx Port", "port1"),
                        ("Rx Frames", "10"),
                    ])],
                ),
                (
                    View::EgressStats,
                    vec![
                        Row::from([
                            ("Traffic Item", "traffic1"),
                            ("Rx Port", "port1"),
                            ("Egress Tracking", "dscp"),
                        ]),
                        Row::from([("Egress Tracking", "10"), ("Rx Frames", "4")]),
                    ],
                ),
            ]),
            &tracked,
        );

        let key = IngressTrackingKey {
            src_port: "port1".to_owned(),
            ..Default::default()
        };
        let mut want = Device::new();
        let f = want.get_or_create_flow("traffic1");
        f.filter = Some("dscp".to_owned());
        let it = f.get_or_create_ingress_tracking(key);
        it.filter = Some("dscp".to_owned());
        it.stats.counters.in_pkts = Some(10);
        it.get_or_create_egress_tracking("10").stats.counters.in_pkts = Some(4);
        assert_eq!(got, want);
    }

    #[test]
    fn merge_conflict_discards_view() {
        let mut root = Device::new();
        port_with_cpu(&mut root, "port1", Some(5));
        let before = root.clone();

        let mut conflicting = Device::new();
        port_with_cpu(&mut conflicting, "port1", Some(6));
        conflicting.get_or_create_flow("traffic1");

        let err = merge_view(&mut root, conflicting).unwrap_err();
        assert!(matches!(err, Error::MergeConflict { .. }), "{err}");
        assert_eq!(root, before);

        let mut agreeing = Device::new();
        port_with_cpu(&mut agreeing, "port1", Some(5));
        agreeing.get_or_create_flow("traffic1");
        merge_view(&mut root, agreeing).unwrap();
        assert!(root.flow("traffic1").is_some());
    }

    #[test]
    fn no_views() {
        assert!(translate(&HashMap::new(), &HashSet::new()).is_empty());
    }

    #[test]
    fn debug_log_does_not_change_result() {
        let input = views([(
            View::PortStats,
            vec![Row::from([("Port Name", "ixia2/port1"), ("Link State", "Link Up")])],
        )]);
        let plain = translate(&input, &HashSet::new());
        set_debug_log(true);
        let debugged = translate(&input, &HashSet::new());
        set_debug_log(false);
        assert_eq!(plain, debugged);
        assert!(json_debug(&plain).contains("\"oper-status\": \"UP\""));
    }

    #[test]
    fn short_port_names() {
        assert_eq!(short_port_name("ixia2/port1").unwrap(), "port1");
        assert_eq!(short_port_name("ixia2/card1/port1").unwrap(), "card1/port1");
        assert_eq!(short_port_name("/port1").unwrap(), "port1");
        for bad in ["port2", "ixia2/", ""] {
            assert_eq!(
                short_port_name(bad).unwrap_err(),
                Error::MalformedPortName(bad.to_owned())
            );
        }
    }

    #[test]
    fn mpls_labels() {
        assert_eq!(mpls_label_from_uint(None), MplsLabel::NoLabel);
        assert_eq!(mpls_label_from_uint(Some(0)), MplsLabel::Ipv4ExplicitNull);
        assert_eq!(mpls_label_from_uint(Some(1)), MplsLabel::RouterAlert);
        assert_eq!(mpls_label_from_uint(Some(2)), MplsLabel::Ipv6ExplicitNull);
        assert_eq!(mpls_label_from_uint(Some(3)), MplsLabel::ImplicitNull);
        assert_eq!(
            mpls_label_from_uint(Some(7)),
            MplsLabel::EntropyLabelIndicator
        );
        assert_eq!(mpls_label_from_uint(Some(4)), MplsLabel::Value(4));
        assert_eq!(mpls_label_from_uint(Some(200)), MplsLabel::Value(200));
        assert_eq!(
            mpls_label_from_uint(Some(u32::MAX.into())),
            MplsLabel::Value(u32::MAX)
        );
        assert_eq!(mpls_label_from_uint(Some(2 << 31)), MplsLabel::Unset);
        assert_eq!(mpls_label_from_uint(Some(u64::MAX)), MplsLabel::Unset);
    }
}
