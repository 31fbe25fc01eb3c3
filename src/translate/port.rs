use super::short_port_name;
use crate::error::Error;
use crate::stats::{PortStats, Table};
use crate::telemetry::{Device, EthernetSpeed, IeeeFloat32, InterfaceCounters, InterfaceType, OperStatus};
use std::collections::HashSet;

/// Translate the Port Statistics view to interfaces.
pub(crate) fn translate_port_stats(in_table: &Table, _: &HashSet<String>) -> Result<Device, Error> {
    let ps = in_table.parse_port_stats()?;

    let mut d = Device::new();
    for row in ps.iter() {
        let port_name = short_port_name(&row.port_name)?;
        let i = d.get_or_create_interface(port_name);
        i.counters = InterfaceCounters {
            in_octets: row.bytes_rx,
            in_pkts: row.frames_rx,
            out_octets: row.bytes_tx,
            out_pkts: row.frames_tx,
        };
        i.ethernet.in_crc_errors = row.crc_errors;
        i.in_rate = row.rx_rate.map(IeeeFloat32::from_f32);
        i.out_rate = row.tx_rate.map(IeeeFloat32::from_f32);
        i.interface_type = Some(InterfaceType::EthernetCsmacd);

        if let Some(status) = oper_status(row)? {
            i.oper_status = Some(status);
        }
        if let Some(speed) = port_speed(row)? {
            i.ethernet.port_speed = Some(speed);
        }
    }

    Ok(d)
}

/// An empty link state is not an error, it just leaves the status unset.
fn oper_status(row: &PortStats) -> Result<Option<OperStatus>, Error> {
    match row.link_state.as_str() {
        "" => Ok(None),
        "Link Up" => Ok(Some(OperStatus::Up)),
        "Link Down" | "No PCS Lock" => Ok(Some(OperStatus::Down)),
        other => Err(Error::UnmappableLinkState {
            port: row.port_name.clone(),
            state: other.to_owned(),
        }),
    }
}

// TODO: map the remaining Ixia line speeds once the full set of captions is known.
fn port_speed(row: &PortStats) -> Result<Option<EthernetSpeed>, Error> {
    match row.line_speed.as_str() {
        "" => Ok(None),
        "10GE LAN" => Ok(Some(EthernetSpeed::Speed10Gb)),
        "100GE" => Ok(Some(EthernetSpeed::Speed100Gb)),
        other => Err(Error::UnmappableLinkSpeed {
            port: row.port_name.clone(),
            speed: other.to_owned(),
        }),
    }
}
