use super::{is_default, merge_leaf, EthernetSpeed, IeeeFloat32, InterfaceType, Merge, OperStatus};
use crate::error::Error;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Interface {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<InterfaceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oper_status: Option<OperStatus>,
    #[serde(skip_serializing_if = "is_default")]
    pub counters: InterfaceCounters,
    #[serde(skip_serializing_if = "is_default")]
    pub ethernet: Ethernet,
    /// Bits per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_rate: Option<IeeeFloat32>,
    /// Bits per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_rate: Option<IeeeFloat32>,
}

impl Interface {
    pub fn new(name: &str) -> Self {
        Interface {
            name: name.to_owned(),
            interface_type: None,
            oper_status: None,
            counters: InterfaceCounters::default(),
            ethernet: Ethernet::default(),
            in_rate: None,
            out_rate: None,
        }
    }
}

impl Merge for Interface {
    fn merge(&mut self, other: Self, path: &str) -> Result<(), Error> {
        let path = format!("{path}/interfaces/interface[name={}]", self.name);
        merge_leaf(&mut self.interface_type, other.interface_type, &path, "type")?;
        merge_leaf(&mut self.oper_status, other.oper_status, &path, "oper-status")?;
        merge_leaf(&mut self.in_rate, other.in_rate, &path, "in-rate")?;
        merge_leaf(&mut self.out_rate, other.out_rate, &path, "out-rate")?;
        self.counters.merge(other.counters, &path)?;
        self.ethernet.merge(other.ethernet, &path)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct InterfaceCounters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_octets: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_pkts: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_octets: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_pkts: Option<u64>,
}

impl Merge for InterfaceCounters {
    fn merge(&mut self, other: Self, path: &str) -> Result<(), Error> {
        let path = format!("{path}/counters");
        merge_leaf(&mut self.in_octets, other.in_octets, &path, "in-octets")?;
        merge_leaf(&mut self.in_pkts, other.in_pkts, &path, "in-pkts")?;
        merge_leaf(&mut self.out_octets, other.out_octets, &path, "out-octets")?;
        merge_leaf(&mut self.out_pkts, other.out_pkts, &path, "out-pkts")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ethernet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_speed: Option<EthernetSpeed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_crc_errors: Option<u64>,
}

impl Merge for Ethernet {
    fn merge(&mut self, other: Self, path: &str) -> Result<(), Error> {
        let path = format!("{path}/ethernet");
        merge_leaf(&mut self.port_speed, other.port_speed, &path, "port-speed")?;
        merge_leaf(
            &mut self.in_crc_errors,
            other.in_crc_errors,
            &path,
            "counters/in-crc-errors",
        )
    }
}
