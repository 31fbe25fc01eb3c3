//! A minimal OpenConfig-style device tree.
//!
//! Every keyed list in the tree is a registry owning its nodes: the
//! `get_or_create_*` accessors return the existing node for a key, or
//! create and register one, so asking twice never yields a duplicate.
//!
//! Trees built independently (one per statistics view) are combined with
//! [`Device::merge`], which unions lists and takes each leaf from whichever
//! side sets it. A leaf set to different values on both sides is a conflict.

use crate::error::Error;
use serde::{Serialize, Serializer};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Debug;

pub use component::{Component, Cpu, CpuUtilization, Memory};
pub use flow::{EgressTracking, Flow, FlowCounters, IngressTracking, IngressTrackingKey, TrafficStats};
pub use interface::{Ethernet, Interface, InterfaceCounters};
pub use types::{ComponentType, EthernetSpeed, IeeeFloat32, InterfaceType, MplsLabel, OperStatus};

pub(crate) mod component;
pub(crate) mod flow;
pub(crate) mod interface;
pub(crate) mod types;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Device {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub components: BTreeMap<String, Component>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub interfaces: BTreeMap<String, Interface>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub flows: BTreeMap<String, Flow>,
}

impl Device {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create_component(&mut self, name: &str) -> &mut Component {
        self.components
            .entry(name.to_owned())
            .or_insert_with(|| Component::new(name))
    }

    pub fn get_or_create_interface(&mut self, name: &str) -> &mut Interface {
        self.interfaces
            .entry(name.to_owned())
            .or_insert_with(|| Interface::new(name))
    }

    pub fn get_or_create_flow(&mut self, name: &str) -> &mut Flow {
        self.flows
            .entry(name.to_owned())
            .or_insert_with(|| Flow::new(name))
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    pub fn interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.get(name)
    }

    pub fn flow(&self, name: &str) -> Option<&Flow> {
        self.flows.get(name)
    }

    /// True if nothing has been translated into this device.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.interfaces.is_empty() && self.flows.is_empty()
    }

    /// Merge `other` into this device.
    ///
    /// On error `self` may be partially merged; callers that need the
    /// previous state should merge into a clone.
    pub fn merge(&mut self, other: Device) -> Result<(), Error> {
        Merge::merge(self, other, "")
    }
}

impl Merge for Device {
    fn merge(&mut self, other: Self, path: &str) -> Result<(), Error> {
        merge_map(&mut self.components, other.components, path)?;
        merge_map(&mut self.interfaces, other.interfaces, path)?;
        merge_map(&mut self.flows, other.flows, path)
    }
}

/// Structural merge of two nodes of the same type.
pub(crate) trait Merge {
    /// Merge `other` into `self`, where `path` is the schema path of the
    /// parent of `self`, used to report conflicts.
    fn merge(&mut self, other: Self, path: &str) -> Result<(), Error>;
}

pub(crate) fn merge_leaf<T: PartialEq + Debug>(
    dst: &mut Option<T>,
    src: Option<T>,
    path: &str,
    leaf: &str,
) -> Result<(), Error> {
    let Some(incoming) = src else {
        return Ok(());
    };
    match dst {
        None => *dst = Some(incoming),
        Some(existing) if *existing == incoming => {}
        Some(existing) => {
            return Err(Error::MergeConflict {
                path: format!("{path}/{leaf}"),
                existing: format!("{existing:?}"),
                incoming: format!("{incoming:?}"),
            })
        }
    }
    Ok(())
}

pub(crate) fn merge_map<K: Ord, V: Merge>(
    dst: &mut BTreeMap<K, V>,
    src: BTreeMap<K, V>,
    path: &str,
) -> Result<(), Error> {
    for (k, v) in src {
        match dst.entry(k) {
            Entry::Vacant(e) => {
                e.insert(v);
            }
            Entry::Occupied(mut e) => e.get_mut().merge(v, path)?,
        }
    }
    Ok(())
}

pub(crate) fn is_default<T: Default + PartialEq>(t: &T) -> bool {
    *t == T::default()
}

/// Render a keyed list as a JSON array of its entries.
pub(crate) fn serialize_values<K, V: Serialize, S: Serializer>(
    map: &BTreeMap<K, V>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(map.values())
}
