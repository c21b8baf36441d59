//! Manifest discovery and loading.
//!
//! The manifest tells the launcher which entry point to run and which
//! runtime version it needs. See [`manifest`] for the accepted formats.

pub mod manifest;

pub use manifest::{
    discover_manifest, load_manifest, parse_legacy_manifest, parse_yaml_manifest, AppManifest,
    RuntimeCommand, DEFAULT_DOWNLOAD_URL, DEFAULT_MIN_VERSION, JAVA_VERSION_PATTERN,
    MANIFEST_CANDIDATES,
};
