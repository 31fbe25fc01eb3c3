use super::{FlowColumn, Row, RowLayout, Table};
use crate::error::Error;

const STRINGS: &[FlowColumn] = &[
    FlowColumn::RxPort,
    FlowColumn::TxPort,
    FlowColumn::SrcIpv4,
    FlowColumn::DstIpv4,
    FlowColumn::SrcIpv6,
    FlowColumn::DstIpv6,
];
const INTEGERS: &[FlowColumn] = &[
    FlowColumn::RxBytes,
    FlowColumn::TxFrames,
    FlowColumn::RxFrames,
    FlowColumn::MplsLabel,
];
const FLOATS: &[FlowColumn] = &[
    FlowColumn::LossPct,
    FlowColumn::TxRate,
    FlowColumn::RxRate,
    FlowColumn::TxFrameRate,
    FlowColumn::RxFrameRate,
];

const FLOW_LAYOUT: RowLayout<'static, FlowColumn> = RowLayout {
    identity: &[FlowColumn::TrafficItem],
    strings: STRINGS,
    integers: INTEGERS,
    floats: FLOATS,
};

// Egress tracking rows carry the filter instead of the traffic item.
const EGRESS_LAYOUT: RowLayout<'static, FlowColumn> = RowLayout {
    identity: &[FlowColumn::TrafficItem, FlowColumn::EgressTracking],
    strings: STRINGS,
    integers: INTEGERS,
    floats: FLOATS,
};

/// The statistics in a Flow Statistics view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowStats {
    pub traffic_item: String,
    pub rx_bytes: Option<u64>,
    pub tx_frames: Option<u64>,
    pub rx_frames: Option<u64>,
    pub loss_pct: Option<f32>,
    pub tx_rate: Option<f32>,
    pub rx_rate: Option<f32>,
    pub tx_frame_rate: Option<f32>,
    pub rx_frame_rate: Option<f32>,

    // Ingress tracking fields, empty unless the flow is ingress tracked.
    pub rx_port: String,
    pub tx_port: String,
    pub src_ipv4: String,
    pub dst_ipv4: String,
    pub src_ipv6: String,
    pub dst_ipv6: String,
    pub mpls_label: Option<u64>,
}

impl FlowStats {
    fn from_row(row: &Row, layout: &RowLayout<'_, FlowColumn>) -> Result<Self, Error> {
        let parsed = row.parse(layout)?;
        Ok(FlowStats {
            traffic_item: row.value(FlowColumn::TrafficItem),
            rx_bytes: parsed.int(FlowColumn::RxBytes),
            tx_frames: parsed.int(FlowColumn::TxFrames),
            rx_frames: parsed.int(FlowColumn::RxFrames),
            loss_pct: parsed.float(FlowColumn::LossPct),
            tx_rate: parsed.float(FlowColumn::TxRate),
            rx_rate: parsed.float(FlowColumn::RxRate),
            tx_frame_rate: parsed.float(FlowColumn::TxFrameRate),
            rx_frame_rate: parsed.float(FlowColumn::RxFrameRate),
            rx_port: row.value(FlowColumn::RxPort),
            tx_port: row.value(FlowColumn::TxPort),
            src_ipv4: row.value(FlowColumn::SrcIpv4),
            dst_ipv4: row.value(FlowColumn::DstIpv4),
            src_ipv6: row.value(FlowColumn::SrcIpv6),
            dst_ipv6: row.value(FlowColumn::DstIpv6),
            mpls_label: parsed.int(FlowColumn::MplsLabel),
        })
    }
}

/// The statistics in the custom egress statistics view.
///
/// A row either names a traffic item, introducing the egress tracking rows
/// that follow it, or carries the statistics for a single egress `filter` of
/// the most recently introduced traffic item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EgressStats {
    pub flow: FlowStats,
    pub filter: String,
}

impl Table {
    /// Parse the table as a Flow Statistics view.
    pub fn parse_flow_stats(&self) -> Result<Vec<FlowStats>, Error> {
        self.iter()
            .map(|row| FlowStats::from_row(row, &FLOW_LAYOUT))
            .collect()
    }

    /// Parse the table as the custom egress statistics view.
    pub fn parse_egress_stats(&self) -> Result<Vec<EgressStats>, Error> {
        self.iter()
            .map(|row| {
                Ok(EgressStats {
                    flow: FlowStats::from_row(row, &EGRESS_LAYOUT)?,
                    filter: row.value(FlowColumn::EgressTracking),
                })
            })
            .collect()
    }
}
