mod assembler;
mod utils;

pub use crate::assembler::assemble;
pub use packrig_common::*;
pub use packrig_error::{ConfigResult, ConfigurationError};
