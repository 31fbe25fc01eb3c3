pub use crate::config::TranslateConfig;
pub use crate::error::Error;
pub use crate::opts::TranslateOpts;
pub use crate::stats::{Row, Table, View};
pub use crate::telemetry::Device;
pub use crate::translate::{set_debug_log, translate};
