//! Column captions of the Ixia statistics views.
//!
//! The `Display` impl of each variant is the exact, case-sensitive caption Ixia
//! uses for that column.

use derive_more::Display;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum PortColumn {
    #[display(fmt = "Port Name")]
    PortName,
    #[display(fmt = "Line Speed")]
    LineSpeed,
    #[display(fmt = "Link State")]
    LinkState,
    #[display(fmt = "Frames Tx.")]
    FramesTx,
    #[display(fmt = "Valid Frames Rx.")]
    FramesRx,
    #[display(fmt = "Bytes Tx.")]
    BytesTx,
    #[display(fmt = "Bytes Rx.")]
    BytesRx,
    #[display(fmt = "Tx. Rate (bps)")]
    TxRate,
    #[display(fmt = "Rx. Rate (bps)")]
    RxRate,
    #[display(fmt = "CRC Errors")]
    CrcErrors,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum PortCpuColumn {
    #[display(fmt = "Port Name")]
    PortName,
    #[display(fmt = "Total Memory(KB)")]
    TotalMemory,
    #[display(fmt = "Free Memory(KB)")]
    FreeMemory,
    #[display(fmt = "%CPU Load")]
    CpuLoad,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum FlowColumn {
    #[display(fmt = "Traffic Item")]
    TrafficItem,
    #[display(fmt = "Tx Frames")]
    TxFrames,
    #[display(fmt = "Rx Frames")]
    RxFrames,
    #[display(fmt = "Loss %")]
    LossPct,
    #[display(fmt = "Tx Frame Rate")]
    TxFrameRate,
    #[display(fmt = "Rx Frame Rate")]
    RxFrameRate,
    #[display(fmt = "Rx Bytes")]
    RxBytes,
    #[display(fmt = "Tx Rate (bps)")]
    TxRate,
    #[display(fmt = "Rx Rate (bps)")]
    RxRate,

    // Ingress tracking columns, only filled in for ingress tracked flows.
    #[display(fmt = "Rx Port")]
    RxPort,
    #[display(fmt = "Tx Port")]
    TxPort,
    #[display(fmt = "MPLS:Label Value")]
    MplsLabel,
    #[display(fmt = "IPv4 :Source Address")]
    SrcIpv4,
    #[display(fmt = "IPv4 :Destination Address")]
    DstIpv4,
    #[display(fmt = "IPv6 :Source Address")]
    SrcIpv6,
    #[display(fmt = "IPv6 :Destination Address")]
    DstIpv6,

    /// Only present in the custom egress statistics view.
    #[display(fmt = "Egress Tracking")]
    EgressTracking,
}
