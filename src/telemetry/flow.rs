use super::{is_default, merge_leaf, merge_map, serialize_values, IeeeFloat32, Merge, MplsLabel};
use crate::error::Error;
use serde::Serialize;
use std::collections::BTreeMap;

/// A traffic flow, keyed by the Ixia traffic item name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Flow {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(flatten)]
    pub stats: TrafficStats,
    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        serialize_with = "serialize_values"
    )]
    pub ingress_tracking: BTreeMap<IngressTrackingKey, IngressTracking>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub egress_tracking: BTreeMap<String, EgressTracking>,
}

impl Flow {
    pub fn new(name: &str) -> Self {
        Flow {
            name: name.to_owned(),
            filter: None,
            stats: TrafficStats::default(),
            ingress_tracking: BTreeMap::new(),
            egress_tracking: BTreeMap::new(),
        }
    }

    pub fn get_or_create_ingress_tracking(&mut self, key: IngressTrackingKey) -> &mut IngressTracking {
        self.ingress_tracking
            .entry(key.clone())
            .or_insert_with(|| IngressTracking::new(key))
    }

    pub fn get_or_create_egress_tracking(&mut self, filter: &str) -> &mut EgressTracking {
        self.egress_tracking
            .entry(filter.to_owned())
            .or_insert_with(|| EgressTracking::new(filter))
    }

    pub fn ingress_tracking(&self, key: &IngressTrackingKey) -> Option<&IngressTracking> {
        self.ingress_tracking.get(key)
    }

    pub fn egress_tracking(&self, filter: &str) -> Option<&EgressTracking> {
        self.egress_tracking.get(filter)
    }
}

impl Merge for Flow {
    fn merge(&mut self, other: Self, path: &str) -> Result<(), Error> {
        let path = format!("{path}/flows/flow[name={}]", self.name);
        merge_leaf(&mut self.filter, other.filter, &path, "filter")?;
        self.stats.merge(other.stats, &path)?;
        merge_map(&mut self.ingress_tracking, other.ingress_tracking, &path)?;
        merge_map(&mut self.egress_tracking, other.egress_tracking, &path)
    }
}

/// Counters and rates shared by flows and their ingress/egress tracking
/// breakdowns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TrafficStats {
    #[serde(skip_serializing_if = "is_default")]
    pub counters: FlowCounters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loss_pct: Option<IeeeFloat32>,
    /// Bits per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_rate: Option<IeeeFloat32>,
    /// Frames per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_frame_rate: Option<IeeeFloat32>,
    /// Bits per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_rate: Option<IeeeFloat32>,
    /// Frames per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_frame_rate: Option<IeeeFloat32>,
}

impl Merge for TrafficStats {
    fn merge(&mut self, other: Self, path: &str) -> Result<(), Error> {
        let counters = format!("{path}/counters");
        let c = other.counters;
        merge_leaf(&mut self.counters.in_octets, c.in_octets, &counters, "in-octets")?;
        merge_leaf(&mut self.counters.in_pkts, c.in_pkts, &counters, "in-pkts")?;
        merge_leaf(&mut self.counters.out_pkts, c.out_pkts, &counters, "out-pkts")?;
        merge_leaf(&mut self.loss_pct, other.loss_pct, path, "loss-pct")?;
        merge_leaf(&mut self.in_rate, other.in_rate, path, "in-rate")?;
        merge_leaf(&mut self.in_frame_rate, other.in_frame_rate, path, "in-frame-rate")?;
        merge_leaf(&mut self.out_rate, other.out_rate, path, "out-rate")?;
        merge_leaf(&mut self.out_frame_rate, other.out_frame_rate, path, "out-frame-rate")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FlowCounters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_octets: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_pkts: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_pkts: Option<u64>,
}

/// The key of an ingress tracking entry. Empty strings are valid key values.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct IngressTrackingKey {
    pub src_port: String,
    pub dst_port: String,
    pub mpls_label: MplsLabel,
    pub src_ipv4: String,
    pub dst_ipv4: String,
    pub src_ipv6: String,
    pub dst_ipv6: String,
}

impl Default for IngressTrackingKey {
    fn default() -> Self {
        IngressTrackingKey {
            src_port: String::new(),
            dst_port: String::new(),
            mpls_label: MplsLabel::NoLabel,
            src_ipv4: String::new(),
            dst_ipv4: String::new(),
            src_ipv6: String::new(),
            dst_ipv6: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct IngressTracking {
    #[serde(flatten)]
    pub key: IngressTrackingKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(flatten)]
    pub stats: TrafficStats,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub egress_tracking: BTreeMap<String, EgressTracking>,
}

impl IngressTracking {
    pub fn new(key: IngressTrackingKey) -> Self {
        IngressTracking {
            key,
            filter: None,
            stats: TrafficStats::default(),
            egress_tracking: BTreeMap::new(),
        }
    }

    pub fn get_or_create_egress_tracking(&mut self, filter: &str) -> &mut EgressTracking {
        self.egress_tracking
            .entry(filter.to_owned())
            .or_insert_with(|| EgressTracking::new(filter))
    }

    pub fn egress_tracking(&self, filter: &str) -> Option<&EgressTracking> {
        self.egress_tracking.get(filter)
    }
}

impl Merge for IngressTracking {
    fn merge(&mut self, other: Self, path: &str) -> Result<(), Error> {
        let k = &self.key;
        let path = format!(
            "{path}/ingress-tracking[src-port={}][dst-port={}][mpls-label={}][src-ipv4={}][dst-ipv4={}][src-ipv6={}][dst-ipv6={}]",
            k.src_port, k.dst_port, k.mpls_label, k.src_ipv4, k.dst_ipv4, k.src_ipv6, k.dst_ipv6
        );
        merge_leaf(&mut self.filter, other.filter, &path, "filter")?;
        self.stats.merge(other.stats, &path)?;
        merge_map(&mut self.egress_tracking, other.egress_tracking, &path)
    }
}

/// Statistics for the traffic matching one egress tracking filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct EgressTracking {
    pub filter: String,
    #[serde(flatten)]
    pub stats: TrafficStats,
}

impl EgressTracking {
    pub fn new(filter: &str) -> Self {
        EgressTracking {
            filter: filter.to_owned(),
            stats: TrafficStats::default(),
        }
    }
}

impl Merge for EgressTracking {
    fn merge(&mut self, other: Self, path: &str) -> Result<(), Error> {
        let path = format!("{path}/egress-tracking[filter={}]", self.filter);
        self.stats.merge(other.stats, &path)
    }
}
