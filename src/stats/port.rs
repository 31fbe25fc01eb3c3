use super::{PortColumn, RowLayout, Table};
use crate::error::Error;

const LAYOUT: RowLayout<'static, PortColumn> = RowLayout {
    identity: &[PortColumn::PortName],
    strings: &[PortColumn::LineSpeed, PortColumn::LinkState],
    integers: &[
        PortColumn::FramesTx,
        PortColumn::FramesRx,
        PortColumn::BytesTx,
        PortColumn::BytesRx,
        PortColumn::CrcErrors,
    ],
    floats: &[PortColumn::TxRate, PortColumn::RxRate],
};

/// The statistics in a Port Statistics view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortStats {
    pub port_name: String,
    pub line_speed: String,
    pub link_state: String,
    pub frames_tx: Option<u64>,
    pub frames_rx: Option<u64>,
    pub bytes_tx: Option<u64>,
    pub bytes_rx: Option<u64>,
    pub crc_errors: Option<u64>,
    pub tx_rate: Option<f32>,
    pub rx_rate: Option<f32>,
}

impl Table {
    /// Parse the table as a Port Statistics view.
    pub fn parse_port_stats(&self) -> Result<Vec<PortStats>, Error> {
        self.iter()
            .map(|row| {
                let parsed = row.parse(&LAYOUT)?;
                Ok(PortStats {
                    port_name: row.value(PortColumn::PortName),
                    line_speed: row.value(PortColumn::LineSpeed),
                    link_state: row.value(PortColumn::LinkState),
                    frames_tx: parsed.int(PortColumn::FramesTx),
                    frames_rx: parsed.int(PortColumn::FramesRx),
                    bytes_tx: parsed.int(PortColumn::BytesTx),
                    bytes_rx: parsed.int(PortColumn::BytesRx),
                    crc_errors: parsed.int(PortColumn::CrcErrors),
                    tx_rate: parsed.float(PortColumn::TxRate),
                    rx_rate: parsed.float(PortColumn::RxRate),
                })
            })
            .collect()
    }
}
