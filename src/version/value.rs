//! Version string to comparable value conversion.
//!
//! A version string is collapsed into one `f64` where earlier components
//! dominate later ones. Component `i` (zero-based) contributes
//! `component / 1000^i`, so `"1.8.0_40"` becomes `1.008000040` and `"9"`
//! becomes `9.0`. Components are expected to stay below 1000.
//!
//! The `f64` value only holds about 16 significant digits, so versions that
//! differ past the sixth component can collapse to the same value. Ordering
//! therefore goes through [`version_key`], which folds the same weights in
//! exact integer arithmetic over the first [`MAX_EXACT_COMPONENTS`]
//! components. `version_value` stays for display and reports.

/// Weight ratio between adjacent version components.
const COMPONENT_SCALE: f64 = 1000.0;

/// Number of leading components compared exactly; later ones are ignored.
///
/// Ten positions of `u32::MAX` in base 1000 still fit in a `u128`.
pub const MAX_EXACT_COMPONENTS: usize = 10;

/// Split a version string into its per-position numeric components.
///
/// Everything from the first `-` on is dropped (e.g. `-ea`), and `_` is
/// treated as a separator equivalent to `.`. Positions that do not parse as
/// an integer are `None`: they keep their slot but contribute nothing.
pub fn parse_components(version: &str) -> Vec<Option<u32>> {
    let release = match version.find('-') {
        Some(idx) => &version[..idx],
        None => version,
    };

    release
        .split(['.', '_'])
        .map(|part| part.parse::<u32>().ok())
        .collect()
}

/// Compute the ordering value of a version string.
///
/// Never fails: malformed components are skipped and a string with no
/// numeric component yields `0.0`.
pub fn version_value(version: &str) -> f64 {
    let mut weight = 1.0;
    let mut value = 0.0;

    for component in parse_components(version) {
        if let Some(component) = component {
            value += f64::from(component) * weight;
        }
        weight /= COMPONENT_SCALE;
    }

    value
}

/// Exact ordering key of a version string.
///
/// Same weighting as [`version_value`], scaled so the last exact position
/// has weight 1. Malformed and missing positions count as zero.
pub fn version_key(version: &str) -> u128 {
    parse_components(version)
        .into_iter()
        .chain(std::iter::repeat(None))
        .take(MAX_EXACT_COMPONENTS)
        .fold(0u128, |key, component| {
            key * 1000 + u128::from(component.unwrap_or(0))
        })
}

/// Check whether `current` is the same as or newer than `required`.
pub fn is_at_least(current: &str, required: &str) -> bool {
    version_key(current) >= version_key(required)
}
