use derive_more::Display;
use serde::{Serialize, Serializer};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize)]
pub enum ComponentType {
    #[display(fmt = "PORT")]
    #[serde(rename = "openconfig-platform-types:PORT")]
    Port,
    #[display(fmt = "CPU")]
    #[serde(rename = "openconfig-platform-types:CPU")]
    Cpu,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize)]
pub enum InterfaceType {
    #[display(fmt = "ethernetCsmacd")]
    #[serde(rename = "iana-if-type:ethernetCsmacd")]
    EthernetCsmacd,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperStatus {
    #[display(fmt = "UP")]
    Up,
    #[display(fmt = "DOWN")]
    Down,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize)]
pub enum EthernetSpeed {
    #[display(fmt = "SPEED_10GB")]
    #[serde(rename = "openconfig-if-ethernet:SPEED_10GB")]
    Speed10Gb,
    #[display(fmt = "SPEED_100GB")]
    #[serde(rename = "openconfig-if-ethernet:SPEED_100GB")]
    Speed100Gb,
}

/// An MPLS label: either one of the reserved label values, a
/// marker for the absence of a label, or a plain 20-bit label value.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum MplsLabel {
    #[display(fmt = "IPV4_EXPLICIT_NULL")]
    Ipv4ExplicitNull,
    #[display(fmt = "ROUTER_ALERT")]
    RouterAlert,
    #[display(fmt = "IPV6_EXPLICIT_NULL")]
    Ipv6ExplicitNull,
    #[display(fmt = "IMPLICIT_NULL")]
    ImplicitNull,
    #[display(fmt = "ENTROPY_LABEL_INDICATOR")]
    EntropyLabelIndicator,
    #[display(fmt = "NO_LABEL")]
    NoLabel,
    #[display(fmt = "UNSET")]
    Unset,
    #[display(fmt = "{_0}")]
    Value(u32),
}

impl Serialize for MplsLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MplsLabel::Value(v) => serializer.serialize_u32(*v),
            other => serializer.collect_str(other),
        }
    }
}

/// A 32-bit IEEE 754 float carried as its big-endian bytes, the way
/// OpenConfig `ieeefloat32` leaves are encoded.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct IeeeFloat32([u8; 4]);

impl IeeeFloat32 {
    pub fn from_f32(f: f32) -> Self {
        IeeeFloat32(f.to_be_bytes())
    }

    pub fn to_f32(self) -> f32 {
        f32::from_be_bytes(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<f32> for IeeeFloat32 {
    fn from(f: f32) -> Self {
        IeeeFloat32::from_f32(f)
    }
}

impl Serialize for IeeeFloat32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}
