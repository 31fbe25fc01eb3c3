use super::ingress_tracking_key;
use crate::error::Error;
use crate::stats::{FlowStats, Table};
use crate::telemetry::{Device, FlowCounters, IeeeFloat32, TrafficStats};
use std::collections::HashSet;

impl From<&FlowStats> for TrafficStats {
    fn from(row: &FlowStats) -> Self {
        // Ixia does not report transmitted bytes for a flow.
        TrafficStats {
            counters: FlowCounters {
                in_octets: row.rx_bytes,
                in_pkts: row.rx_frames,
                out_pkts: row.tx_frames,
            },
            loss_pct: row.loss_pct.map(IeeeFloat32::from_f32),
            in_rate: row.rx_rate.map(IeeeFloat32::from_f32),
            in_frame_rate: row.rx_frame_rate.map(IeeeFloat32::from_f32),
            out_rate: row.tx_rate.map(IeeeFloat32::from_f32),
            out_frame_rate: row.tx_frame_rate.map(IeeeFloat32::from_f32),
        }
    }
}

/// Translate the Flow Statistics view to flows.
///
/// The statistics of ingress tracked flows are placed on the ingress
/// tracking entry matching the row, rather than on the flow itself.
pub(crate) fn translate_flow_stats(
    in_table: &Table,
    ingress_tracked_flows: &HashSet<String>,
) -> Result<Device, Error> {
    let fs = in_table.parse_flow_stats()?;

    let mut d = Device::new();
    for row in fs.iter() {
        let f = d.get_or_create_flow(&row.traffic_item);
        let stats = TrafficStats::from(row);
        if ingress_tracked_flows.contains(&row.traffic_item) {
            f.get_or_create_ingress_tracking(ingress_tracking_key(row)).stats = stats;
        } else {
            f.stats = stats;
        }
    }
    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Row;
    use crate::telemetry::{IngressTrackingKey, MplsLabel};
    use pretty_assertions::assert_eq;

    fn single_flow_row() -> Row {
        Row::from([
            ("Traffic Item", "traffic1"),
            ("Loss %", "2.1"),
            ("Rx Bytes", "100"),
            ("Rx Frames", "10"),
            ("Rx Frame Rate", "1"),
            ("Rx Rate (bps)", "1024"),
            ("Tx Frames", "20"),
            ("Tx Frame Rate", "2"),
            ("Tx Rate (bps)", "2048"),
        ])
    }

    fn want_stats() -> TrafficStats {
        TrafficStats {
            counters: FlowCounters {
                in_octets: Some(100),
                in_pkts: Some(10),
                out_pkts: Some(20),
            },
            loss_pct: Some(IeeeFloat32::from_f32(2.1)),
            in_rate: Some(IeeeFloat32::from_f32(1024.0)),
            in_frame_rate: Some(IeeeFloat32::from_f32(1.0)),
            out_rate: Some(IeeeFloat32::from_f32(2048.0)),
            out_frame_rate: Some(IeeeFloat32::from_f32(2.0)),
        }
    }

    #[test]
    fn single_flow_statistics() {
        let got = translate_flow_stats(&Table::from(vec![single_flow_row()]), &HashSet::new())
            .unwrap();

        let mut want = Device::new();
        want.get_or_create_flow("traffic1").stats = want_stats();
        assert_eq!(got, want);
    }

    #[test]
    fn ingress_tracked_flow_without_tracking_columns() {
        let tracked = HashSet::from(["traffic1".to_owned()]);
        let got = translate_flow_stats(&Table::from(vec![single_flow_row()]), &tracked).unwrap();

        let mut want = Device::new();
        want.get_or_create_flow("traffic1")
            .get_or_create_ingress_tracking(IngressTrackingKey::default())
            .stats = want_stats();
        assert_eq!(got, want);
        assert_eq!(got.flow("traffic1").unwrap().stats, TrafficStats::default());
    }

    #[test]
    fn ingress_tracking_statistics() {
        let mut row = single_flow_row();
        for (k, v) in [
            ("Rx Port", "port1"),
            ("Tx Port", "Eth1"),
            ("MPLS:Label Value", "0"),
            ("Source Endpoint", "255.255.255.255"),
            ("Dest Endpoint", "de:ad:be:ee:ee:ef"),
            ("IPv4 :Source Address", "1.1.1.1"),
            ("IPv4 :Destination Address", "2.2.2.2"),
            ("IPv6 :Source Address", "1::"),
            ("IPv6 :Destination Address", "EE::"),
            ("IPv4 :Precedence", "3"),
        ] {
            row.insert(k, v);
        }
        let tracked = HashSet::from(["traffic1".to_owned()]);
        let got = translate_flow_stats(&Table::from(vec![row]), &tracked).unwrap();

        let mut want = Device::new();
        want.get_or_create_flow("traffic1")
            .get_or_create_ingress_tracking(IngressTrackingKey {
                src_port: "port1".to_owned(),
                dst_port: "Eth1".to_owned(),
                mpls_label: MplsLabel::Ipv4ExplicitNull,
                src_ipv4: "1.1.1.1".to_owned(),
                dst_ipv4: "2.2.2.2".to_owned(),
                src_ipv6: "1::".to_owned(),
                dst_ipv6: "EE::".to_owned(),
            })
            .stats = want_stats();
        assert_eq!(got, want);
    }

    #[test]
    fn one_flow_many_ingress_entries() {
        let rows = ["port1", "port2"]
            .into_iter()
            .map(|port| {
                Row::from([
                    ("Traffic Item", "traffic1"),
                    ("Rx Port", port),
                    ("Rx Frames", "1"),
                ])
            })
            .collect::<Table>();
        let tracked = HashSet::from(["traffic1".to_owned()]);
        let got = translate_flow_stats(&rows, &tracked).unwrap();
        assert_eq!(got.flows.len(), 1);
        assert_eq!(got.flow("traffic1").unwrap().ingress_tracking.len(), 2);
    }

    #[test]
    fn errors() {
        let cases: Vec<(&str, Row, &str)> = vec![
            ("missing traffic item", Row::from([("Loss %", "2.1")]), "required key"),
            (
                "invalid input for uint64 statistic",
                Row::from([("Traffic Item", "traffic1"), ("Rx Bytes", "one hundred")]),
                "Rx Bytes",
            ),
            (
                "invalid input for float32 statistic",
                Row::from([("Traffic Item", "traffic1"), ("Loss %", "two point one")]),
                "Loss %",
            ),
        ];

        for (name, row, want_err) in cases {
            let err = translate_flow_stats(&Table::from(vec![row]), &HashSet::new()).unwrap_err();
            assert!(
                err.to_string().contains(want_err),
                "{name}: got error {err}, want substring {want_err:?}"
            );
        }
    }
}
