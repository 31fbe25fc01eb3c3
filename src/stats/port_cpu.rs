use super::{PortCpuColumn, RowLayout, Table};
use crate::error::Error;

const LAYOUT: RowLayout<'static, PortCpuColumn> = RowLayout {
    identity: &[PortCpuColumn::PortName],
    strings: &[],
    integers: &[
        PortCpuColumn::TotalMemory,
        PortCpuColumn::FreeMemory,
        PortCpuColumn::CpuLoad,
    ],
    floats: &[],
};

/// The statistics in a Port CPU Statistics view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortCpuStats {
    pub port_name: String,
    pub total_memory: Option<u64>,
    pub free_memory: Option<u64>,
    pub cpu_load: Option<u64>,
}

impl Table {
    /// Parse the table as a Port CPU Statistics view.
    pub fn parse_port_cpu_stats(&self) -> Result<Vec<PortCpuStats>, Error> {
        self.iter()
            .map(|row| {
                let parsed = row.parse(&LAYOUT)?;
                Ok(PortCpuStats {
                    port_name: row.value(PortCpuColumn::PortName),
                    total_memory: parsed.int(PortCpuColumn::TotalMemory),
                    free_memory: parsed.int(PortCpuColumn::FreeMemory),
                    cpu_load: parsed.int(PortCpuColumn::CpuLoad),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Row;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_row() {
        let table = Table::from(vec![Row::from([
            ("Port Name", "ixia2/port2"),
            ("%CPU Load", "42"),
        ])]);
        assert_eq!(
            table.parse_port_cpu_stats().unwrap(),
            vec![PortCpuStats {
                port_name: "ixia2/port2".to_owned(),
                total_memory: None,
                free_memory: None,
                cpu_load: Some(42),
            }]
        );
    }

    #[test]
    fn cpu_load_is_an_integer() {
        let table = Table::from(vec![Row::from([
            ("Port Name", "ixia2/port2"),
            ("%CPU Load", "42.5"),
        ])]);
        let err = table.parse_port_cpu_stats().unwrap_err();
        assert!(err.to_string().contains("CPU Load"), "{err}");
    }
}
