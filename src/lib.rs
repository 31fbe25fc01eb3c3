//! # Overview
//!
//! Translates the statistics views of an Ixia traffic generator into an
//! OpenConfig style telemetry tree.
//!
//! Ixia reports its statistics as views, each view being a table of rows keyed
//! by column caption. All values are strings, and any column may be missing.
//! The supported views are:
//! * `Port Statistics`
//! * `Port CPU Statistics`
//! * `Flow Statistics`
//! * `EgressStatView`
//!
//! Each view is parsed into typed records ([`stats`]), translated into its own
//! partial [`telemetry::Device`] ([`translate`]) and the partial devices are
//! merged into a single tree.
//!
//! # Mappings
//!
//! Port Statistics
//! * `/interfaces/interface[name=<port>]`
//!   - counters, oper-status, ethernet port-speed and crc errors, rates
//!
//! Port CPU Statistics
//! * `/components/component[name=<port>]`
//!   - type PORT, memory, subcomponent `<port>_CPU`
//! * `/components/component[name=<port>_CPU]`
//!   - type CPU, parent `<port>`, cpu utilization
//!
//! Flow Statistics
//! * `/flows/flow[name=<traffic item>]`
//!   - counters and rates for flows without ingress tracking
//! * `/flows/flow[name=<traffic item>]/ingress-tracking[<key>]`
//!   - counters and rates for ingress tracked flows
//!
//! EgressStatView
//! * `/flows/flow[name=<traffic item>]/egress-tracking[filter=<value>]`
//! * `/flows/flow[name=<traffic item>]/ingress-tracking[<key>]/egress-tracking[filter=<value>]`
//!
//! Port names are reported as `<chassis>/<port>`; only the `<port>` part is
//! used in the tree.
#![deny(warnings, clippy::all)]

pub mod config;
pub mod error;
pub mod opts;
pub mod prelude;
pub mod stats;
pub mod telemetry;
pub mod tracing;
pub mod translate;
