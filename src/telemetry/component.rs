use super::{is_default, merge_leaf, ComponentType, Merge};
use crate::error::Error;
use serde::Serialize;
use std::collections::BTreeSet;

/// A hardware component, e.g. an Ixia port or the CPU serving it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Component {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub component_type: Option<ComponentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub subcomponents: BTreeSet<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub memory: Memory,
    #[serde(skip_serializing_if = "is_default")]
    pub cpu: Cpu,
}

impl Component {
    pub fn new(name: &str) -> Self {
        Component {
            name: name.to_owned(),
            component_type: None,
            parent: None,
            subcomponents: BTreeSet::new(),
            memory: Memory::default(),
            cpu: Cpu::default(),
        }
    }

    pub fn add_subcomponent(&mut self, name: &str) {
        self.subcomponents.insert(name.to_owned());
    }
}

impl Merge for Component {
    fn merge(&mut self, other: Self, path: &str) -> Result<(), Error> {
        let path = format!("{path}/components/component[name={}]", self.name);
        merge_leaf(&mut self.component_type, other.component_type, &path, "type")?;
        merge_leaf(&mut self.parent, other.parent, &path, "parent")?;
        self.subcomponents.extend(other.subcomponents);
        self.memory.merge(other.memory, &path)?;
        self.cpu.merge(other.cpu, &path)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Memory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilized: Option<u64>,
}

impl Merge for Memory {
    fn merge(&mut self, other: Self, path: &str) -> Result<(), Error> {
        let path = format!("{path}/memory");
        merge_leaf(&mut self.available, other.available, &path, "available")?;
        merge_leaf(&mut self.utilized, other.utilized, &path, "utilized")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Cpu {
    #[serde(skip_serializing_if = "is_default")]
    pub utilization: CpuUtilization,
}

impl Merge for Cpu {
    fn merge(&mut self, other: Self, path: &str) -> Result<(), Error> {
        let path = format!("{path}/cpu/utilization");
        merge_leaf(
            &mut self.utilization.instant,
            other.utilization.instant,
            &path,
            "instant",
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CpuUtilization {
    /// Percentage, 0-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instant: Option<u8>,
}
