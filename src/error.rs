use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("row did not include value for required key {key:?}")]
    MissingIdentity { key: String },

    #[error("invalid value {value:?} for numeric stat {key:?} for key {name:?}")]
    InvalidNumericField {
        key: String,
        value: String,
        name: String,
    },

    #[error("invalid port name: got {0:?}, want [ixia_name]/[port_name]")]
    MalformedPortName(String),

    #[error("statistics row {port:?} has an unmappable port link state {state:?}")]
    UnmappableLinkState { port: String, state: String },

    #[error("statistics row {port:?} has an unmappable port link speed {speed:?}")]
    UnmappableLinkSpeed { port: String, speed: String },

    #[error("egress tracking row with filter {filter:?} does not follow a traffic item row")]
    EgressRowWithoutFlow { filter: String },

    #[error("conflicting values for {path}: existing {existing}, incoming {incoming}")]
    MergeConflict {
        path: String,
        existing: String,
        incoming: String,
    },
}
