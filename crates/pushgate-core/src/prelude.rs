pub use pushgate_types::prelude::*;

pub use crate::config::{MessagePolicy, ProcessorConfig};

// vim: ts=4
