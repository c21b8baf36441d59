//! Runtime version parsing, gating, and detection.
//!
//! This module provides:
//! - [`value`] - Collapsing a version string into a single comparable number
//! - [`gate`] - The pass/fail decision between current and required versions
//! - [`probe`] - Discovering the version of the hosting runtime
//!
//! # Example
//!
//! ```
//! use gatelaunch::version::{check_version, GateResult};
//!
//! assert_eq!(check_version("11.0.2", "1.8.0_40"), GateResult::Pass);
//! assert!(!check_version("1.7.0_80", "1.8.0_40").is_pass());
//! ```

pub mod gate;
pub mod probe;
pub mod value;

pub use gate::{check_version, GateResult};
pub use probe::{
    extract_version, RuntimeProbe, RuntimeVersion, VersionSource, DEFAULT_VERSION_PATTERN,
};
pub use value::{
    is_at_least, parse_components, version_key, version_value, MAX_EXACT_COMPONENTS,
};
