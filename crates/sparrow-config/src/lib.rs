//! KDL configuration parsing for Sparrow.
//!
//! An optional `sparrow.kdl` file overrides the provisioning defaults.

pub mod error;
pub mod site;

pub use error::{ConfigError, ConfigResult};
pub use site::{load_settings, parse_settings};
