use super::ingress_tracking_key;
use crate::error::Error;
use crate::stats::{EgressStats, Table};
use crate::telemetry::{Device, IngressTrackingKey, TrafficStats};
use std::collections::HashSet;

/// Translate the custom egress statistics view to egress tracking entries.
///
/// The view is a sequence of traffic item rows, each followed by the egress
/// tracking rows for that traffic item, so rows must stay in the order Ixia
/// produced them.
pub(crate) fn translate_egress_stats(
    in_table: &Table,
    ingress_tracked_flows: &HashSet<String>,
) -> Result<Device, Error> {
    let es = in_table.parse_egress_stats()?;

    let mut d = Device::new();
    es.iter().try_fold(EgressScan::default(), |scan, row| {
        scan.step(&mut d, row, ingress_tracked_flows)
    })?;
    Ok(d)
}

/// The traffic item that egress tracking rows are currently being read for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct EgressScan {
    // None until the first traffic item row.
    flow: Option<String>,
    // Set when the current flow is ingress tracked.
    ingress_tracking: Option<IngressTrackingKey>,
}

impl EgressScan {
    fn step(
        mut self,
        d: &mut Device,
        row: &EgressStats,
        ingress_tracked_flows: &HashSet<String>,
    ) -> Result<Self, Error> {
        let traffic_item = &row.flow.traffic_item;
        if !traffic_item.is_empty() {
            let f = d.get_or_create_flow(traffic_item);
            f.filter = Some(row.filter.clone());
            self.ingress_tracking = if ingress_tracked_flows.contains(traffic_item) {
                let key = ingress_tracking_key(&row.flow);
                f.get_or_create_ingress_tracking(key.clone()).filter = Some(row.filter.clone());
                Some(key)
            } else {
                None
            };
            self.flow = Some(traffic_item.clone());
            return Ok(self);
        }

        let flow = self
            .flow
            .as_deref()
            .ok_or_else(|| Error::EgressRowWithoutFlow {
                filter: row.filter.clone(),
            })?;
        let f = d.get_or_create_flow(flow);
        let et = match &self.ingress_tracking {
            None => f.get_or_create_egress_tracking(&row.filter),
            Some(key) => f
                .get_or_create_ingress_tracking(key.clone())
                .get_or_create_egress_tracking(&row.filter),
        };
        et.stats = TrafficStats::from(&row.flow);
        Ok(self)
    }
}
