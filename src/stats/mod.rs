//! Typed parsing of the statistics tables returned by Ixia.
//!
//! Ixia reports every statistic as a string keyed by its column caption. The
//! parsers in this module turn a [`Table`] of such rows into typed records
//! for each of the known views, where a column that is absent or empty
//! becomes `None`.

use crate::error::Error;
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display as FmtDisplay;
use std::hash::Hash;
use tracing::warn;

pub use columns::{FlowColumn, PortColumn, PortCpuColumn};
pub use flow::{EgressStats, FlowStats};
pub use port::PortStats;
pub use port_cpu::PortCpuStats;

pub(crate) mod columns;
pub(crate) mod flow;
pub(crate) mod port;
pub(crate) mod port_cpu;

/// A statistics view, identified by its Ixia caption.
///
/// Views other than the four known ones are kept as [`View::Other`] so that
/// they can be carried through (and skipped) without failing deserialization.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum View {
    #[display(fmt = "Port Statistics")]
    PortStats,
    #[display(fmt = "Port CPU Statistics")]
    PortCpuStats,
    #[display(fmt = "Flow Statistics")]
    FlowStats,
    /// The custom egress statistics view.
    #[display(fmt = "EgressStatView")]
    EgressStats,
    #[display(fmt = "{_0}")]
    Other(String),
}

impl View {
    pub fn is_known(&self) -> bool {
        !matches!(self, View::Other(_))
    }
}

impl From<&str> for View {
    fn from(s: &str) -> Self {
        match s {
            "Port Statistics" => View::PortStats,
            "Port CPU Statistics" => View::PortCpuStats,
            "Flow Statistics" => View::FlowStats,
            "EgressStatView" => View::EgressStats,
            other => View::Other(other.to_owned()),
        }
    }
}

impl From<String> for View {
    fn from(s: String) -> Self {
        View::from(s.as_str())
    }
}

impl From<View> for String {
    fn from(v: View) -> Self {
        v.to_string()
    }
}

/// An individual row of statistics from an Ixia page, keyed by column caption.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, From, Into)]
#[serde(transparent)]
pub struct Row(HashMap<String, String>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.0.insert(column.into(), value.into());
    }

    /// The raw value of a string column, empty when the column is absent.
    pub(crate) fn value<K: FmtDisplay>(&self, column: K) -> String {
        self.get(&column.to_string())
            .map(str::to_owned)
            .unwrap_or_default()
    }

    /// Parse the row according to `layout`.
    ///
    /// Fails if none of the identity columns hold a value, or if a numeric
    /// column holds something that does not parse. Absent or empty numeric
    /// columns are simply left out of the result.
    pub(crate) fn parse<K>(&self, layout: &RowLayout<'_, K>) -> Result<ParsedRow<K>, Error>
    where
        K: Copy + Eq + Hash + FmtDisplay,
    {
        let name = layout
            .identity
            .iter()
            .map(|k| self.value(*k))
            .find(|v| !v.is_empty())
            .ok_or_else(|| Error::MissingIdentity {
                key: layout
                    .identity
                    .iter()
                    .map(|k| k.to_string())
                    .collect::<Vec<_>>()
                    .join(" or "),
            })?;

        for k in layout.strings {
            let _ = self.lookup(*k, &name);
        }

        let mut ints = HashMap::new();
        for k in layout.integers {
            if let Some(v) = self.lookup(*k, &name) {
                let i = v.parse::<u64>().map_err(|_| invalid(*k, v, &name))?;
                ints.insert(*k, i);
            }
        }

        let mut floats = HashMap::new();
        for k in layout.floats {
            if let Some(v) = self.lookup(*k, &name) {
                let f = parse_f32(v).ok_or_else(|| invalid(*k, v, &name))?;
                floats.insert(*k, f);
            }
        }

        Ok(ParsedRow { ints, floats })
    }

    /// Look up a non-empty value, warning if the column is present but empty.
    fn lookup<K: FmtDisplay>(&self, key: K, name: &str) -> Option<&str> {
        let key = key.to_string();
        let v = self.get(&key);
        if v == Some("") {
            warn!("got empty stat {:?} for key {:?}", key, name);
        }
        v.filter(|v| !v.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row(iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Row {
    fn from(kvs: [(K, V); N]) -> Self {
        kvs.into_iter().collect()
    }
}

/// A set of rows that together make up a single statistics view.
///
/// Row order is significant for the egress view, where a traffic item row
/// introduces the egress tracking rows that follow it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, From, Into)]
#[serde(transparent)]
pub struct Table(Vec<Row>);

impl Table {
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Table(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// How the columns of a view are interpreted.
#[derive(Debug)]
pub(crate) struct RowLayout<'a, K> {
    /// At least one of these must hold a non-empty value.
    pub identity: &'a [K],
    /// Only checked for presence.
    pub strings: &'a [K],
    pub integers: &'a [K],
    pub floats: &'a [K],
}

#[derive(Debug)]
pub(crate) struct ParsedRow<K> {
    ints: HashMap<K, u64>,
    floats: HashMap<K, f32>,
}

impl<K: Eq + Hash> ParsedRow<K> {
    pub fn int(&self, key: K) -> Option<u64> {
        self.ints.get(&key).copied()
    }

    pub fn float(&self, key: K) -> Option<f32> {
        self.floats.get(&key).copied()
    }
}

fn invalid<K: FmtDisplay>(key: K, value: &str, name: &str) -> Error {
    Error::InvalidNumericField {
        key: key.to_string(),
        value: value.to_owned(),
        name: name.to_owned(),
    }
}

/// Parse a single precision float, rejecting finite values that are out of range.
fn parse_f32(v: &str) -> Option<f32> {
    let f = v.parse::<f32>().ok()?;
    if f.is_infinite() && !v.to_ascii_lowercase().contains("inf") {
        return None;
    }
    Some(f)
}
