use super::short_port_name;
use crate::error::Error;
use crate::stats::Table;
use crate::telemetry::{ComponentType, Device, Memory};
use std::collections::HashSet;
use tracing::warn;

/// Translate the Port CPU Statistics view to a port component and the CPU
/// component serving it.
pub(crate) fn translate_port_cpu_stats(
    in_table: &Table,
    _: &HashSet<String>,
) -> Result<Device, Error> {
    let pcs = in_table.parse_port_cpu_stats()?;

    let mut d = Device::new();
    for row in pcs.iter() {
        let port_name = short_port_name(&row.port_name)?;
        let cpu_name = format!("{port_name}_CPU");

        let cpu = d.get_or_create_component(&cpu_name);
        cpu.component_type = Some(ComponentType::Cpu);
        cpu.parent = Some(port_name.to_owned());
        if let Some(load) = row.cpu_load {
            cpu.cpu.utilization.instant = Some(cpu_load_percent(&row.port_name, load));
        }

        let port = d.get_or_create_component(port_name);
        port.component_type = Some(ComponentType::Port);
        port.add_subcomponent(&cpu_name);
        if let (Some(total), Some(free)) = (row.total_memory, row.free_memory) {
            let utilized = total.checked_sub(free);
            if utilized.is_none() {
                warn!(
                    "Port {} reports more free memory ({}KB) than total memory ({}KB)",
                    row.port_name, free, total
                );
            }
            port.memory = Memory {
                available: Some(free),
                utilized,
            };
        }
    }

    Ok(d)
}

/// The load is a percentage, anything that does not fit in a u8 saturates.
fn cpu_load_percent(port_name: &str, load: u64) -> u8 {
    u8::try_from(load).unwrap_or_else(|_| {
        warn!(
            "Port {} reports an out of range CPU load {}, saturating",
            port_name, load
        );
        u8::MAX
    })
}
