//! Application manifest loading.
//!
//! The manifest names the entry point to launch and the minimum runtime
//! version it needs. Two formats are accepted:
//!
//! - `application.main`: line 1 is the entry point, optional line 2 is the
//!   minimum version
//! - `gatelaunch.yml` / `gatelaunch.yaml`: structured YAML with optional
//!   runtime probe and download link settings

use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GatelaunchError, Result};
use crate::version::DEFAULT_VERSION_PATTERN;

/// Minimum version used when the manifest does not name one.
pub const DEFAULT_MIN_VERSION: &str = "1.8.0_40";

/// Download page suggested when the default Java probe is in use.
pub const DEFAULT_DOWNLOAD_URL: &str = "https://www.java.com/download/";

/// Version pattern for `java -version` output.
///
/// Anchored on the quoted version so banners such as
/// `Picked up JAVA_TOOL_OPTIONS: -Xmx512m` are skipped.
pub const JAVA_VERSION_PATTERN: &str = r#"version "([^"]+)""#;

/// File names searched for, in priority order, when no path is given.
pub const MANIFEST_CANDIDATES: &[&str] = &["gatelaunch.yml", "gatelaunch.yaml", "application.main"];

/// Command used to ask the hosting runtime for its version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeCommand {
    /// Program to run (e.g., "java").
    pub command: String,

    /// Arguments passed to the program (e.g., ["-version"]).
    #[serde(default)]
    pub args: Vec<String>,

    /// Regex whose first capture group is the version.
    #[serde(default)]
    pub pattern: Option<String>,
}

impl RuntimeCommand {
    /// Probe used when the manifest has no `runtime` section: `java -version`.
    pub fn java() -> Self {
        Self {
            command: "java".to_string(),
            args: vec!["-version".to_string()],
            pattern: Some(JAVA_VERSION_PATTERN.to_string()),
        }
    }

    /// Pattern the probe applies: the configured one, else the Java pattern
    /// for a `java` command, else the generic version pattern.
    pub fn version_pattern(&self) -> &str {
        if let Some(pattern) = self.pattern.as_deref() {
            return pattern;
        }
        let program = Path::new(&self.command)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        if program == "java" {
            JAVA_VERSION_PATTERN
        } else {
            DEFAULT_VERSION_PATTERN
        }
    }

    /// Command line as shown in logs and errors.
    pub fn display_command(&self) -> String {
        if self.args.is_empty() {
            self.command.clone()
        } else {
            format!("{} {}", self.command, self.args.join(" "))
        }
    }
}

/// The two things the launcher must know, plus presentation extras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppManifest {
    /// Registry id of the entry point to launch.
    pub entry_point: String,

    /// Minimum runtime version, inclusive.
    #[serde(
        default = "default_min_version",
        deserialize_with = "deserialize_version"
    )]
    pub min_version: String,

    /// How to discover the current runtime version.
    #[serde(default)]
    pub runtime: Option<RuntimeCommand>,

    /// Where users can get a newer runtime.
    #[serde(default)]
    pub download_url: Option<String>,

    /// Human-readable runtime name used in error messages.
    #[serde(default)]
    pub runtime_name: Option<String>,
}

fn default_min_version() -> String {
    DEFAULT_MIN_VERSION.to_string()
}

/// Accept quoted versions and bare integers; reject floats, which lose
/// trailing zeros (`1.10` would read as `1.1`).
fn deserialize_version<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) if n.is_u64() => Ok(n.to_string()),
        serde_yaml::Value::Null => Ok(default_min_version()),
        other => Err(D::Error::custom(format!(
            "min_version must be a quoted string, got {:?}",
            other
        ))),
    }
}

impl AppManifest {
    /// Create a manifest for `entry_point` with the default minimum version.
    pub fn new(entry_point: impl Into<String>) -> Self {
        Self {
            entry_point: entry_point.into(),
            min_version: default_min_version(),
            runtime: None,
            download_url: None,
            runtime_name: None,
        }
    }

    /// Replace the entry point and/or minimum version.
    pub fn with_overrides(mut self, entry_point: Option<String>, min_version: Option<String>) -> Self {
        if let Some(entry) = entry_point {
            self.entry_point = entry;
        }
        if let Some(min) = min_version {
            self.min_version = min;
        }
        self
    }

    /// The configured runtime probe, or `java -version`.
    pub fn runtime_command(&self) -> RuntimeCommand {
        self.runtime.clone().unwrap_or_else(RuntimeCommand::java)
    }

    /// Name shown to users when the runtime is too old.
    pub fn runtime_display_name(&self) -> String {
        if let Some(name) = &self.runtime_name {
            return name.clone();
        }
        match &self.runtime {
            Some(runtime) => runtime.command.clone(),
            None => "Java".to_string(),
        }
    }

    /// Where to send users for a newer runtime, if anywhere.
    pub fn download_link(&self) -> Option<String> {
        match (&self.download_url, &self.runtime) {
            (Some(url), _) => Some(url.clone()),
            (None, None) => Some(DEFAULT_DOWNLOAD_URL.to_string()),
            (None, Some(_)) => None,
        }
    }

    /// Trim fields and check required values.
    pub fn validate(mut self) -> Result<Self> {
        self.entry_point = self.entry_point.trim().to_string();
        if self.entry_point.is_empty() {
            return Err(GatelaunchError::ConfigValidationError {
                message: "entry point must not be empty".to_string(),
            });
        }

        self.min_version = self.min_version.trim().to_string();
        if self.min_version.is_empty() {
            self.min_version = default_min_version();
        }

        if let Some(runtime) = &self.runtime {
            if runtime.command.trim().is_empty() {
                return Err(GatelaunchError::ConfigValidationError {
                    message: "runtime.command must not be empty".to_string(),
                });
            }
        }

        self.download_url = self
            .download_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(self)
    }
}

/// Find the first manifest candidate present in `dir`.
pub fn discover_manifest(dir: &Path) -> Option<PathBuf> {
    MANIFEST_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load and validate a manifest, picking the format from the extension.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if the entry point is missing.
pub fn load_manifest(path: &Path) -> Result<AppManifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GatelaunchError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GatelaunchError::Io(e)
        }
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml") | Some("yaml")
    );

    let manifest = if is_yaml {
        parse_yaml_manifest(&content, path)?
    } else {
        parse_legacy_manifest(&content)
    };

    tracing::debug!(
        "Loaded manifest from {}: entry_point={}, min_version={}",
        path.display(),
        manifest.entry_point,
        manifest.min_version
    );

    manifest.validate()
}

/// Parse YAML manifest content.
pub fn parse_yaml_manifest(content: &str, source_path: &Path) -> Result<AppManifest> {
    serde_yaml::from_str(content).map_err(|e| GatelaunchError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse the two-line `application.main` format.
///
/// Validation happens separately; an empty first line is kept as-is here.
pub fn parse_legacy_manifest(content: &str) -> AppManifest {
    // UTF-8 byte order mark
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines();
    let entry_point = lines.next().unwrap_or_default().trim().to_string();
    let min_version = lines
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .unwrap_or_else(default_min_version);

    AppManifest {
        min_version,
        ..AppManifest::new(entry_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn legacy_manifest_reads_both_lines() {
        let manifest = parse_legacy_manifest("com.example.App\n1.8.0_101\n");
        assert_eq!(manifest.entry_point, "com.example.App");
        assert_eq!(manifest.min_version, "1.8.0_101");
    }

    #[test]
    fn legacy_manifest_defaults_min_version() {
        let manifest = parse_legacy_manifest("com.example.App\n");
        assert_eq!(manifest.min_version, DEFAULT_MIN_VERSION);

        let manifest = parse_legacy_manifest("com.example.App\n   \n");
        assert_eq!(manifest.min_version, DEFAULT_MIN_VERSION);
    }

    #[test]
    fn legacy_manifest_trims_whitespace() {
        let manifest = parse_legacy_manifest("  app.main \r\n 11 \r\n");
        assert_eq!(manifest.entry_point, "app.main");
        assert_eq!(manifest.min_version, "11");
    }

    #[test]
    fn legacy_manifest_strips_byte_order_mark() {
        let manifest = parse_legacy_manifest("\u{feff}com.example.App\r\n11\r\n");
        assert_eq!(manifest.entry_point, "com.example.App");
        assert_eq!(manifest.min_version, "11");
    }

    #[test]
    fn empty_legacy_manifest_fails_validation() {
        let result = parse_legacy_manifest("").validate();
        assert!(matches!(
            result,
            Err(GatelaunchError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn yaml_manifest_full() {
        let yaml = r#"
entry_point: app.main
min_version: "17.0.2"
runtime_name: Java
download_url: https://adoptium.net/
runtime:
  command: java
  args: ["-version"]
"#;
        let manifest = parse_yaml_manifest(yaml, Path::new("gatelaunch.yml")).unwrap();
        assert_eq!(manifest.entry_point, "app.main");
        assert_eq!(manifest.min_version, "17.0.2");
        assert_eq!(manifest.runtime_display_name(), "Java");
        assert_eq!(manifest.download_url.as_deref(), Some("https://adoptium.net/"));
        let runtime = manifest.runtime.unwrap();
        assert_eq!(runtime.display_command(), "java -version");
        assert!(runtime.pattern.is_none());
    }

    #[test]
    fn yaml_manifest_defaults_min_version() {
        let manifest = parse_yaml_manifest("entry_point: app.main\n", Path::new("x.yml")).unwrap();
        assert_eq!(manifest.min_version, DEFAULT_MIN_VERSION);
        assert!(manifest.runtime.is_none());
    }

    #[test]
    fn yaml_manifest_accepts_integer_version() {
        let manifest =
            parse_yaml_manifest("entry_point: a\nmin_version: 21\n", Path::new("x.yml")).unwrap();
        assert_eq!(manifest.min_version, "21");
    }

    #[test]
    fn yaml_manifest_rejects_float_version() {
        let result = parse_yaml_manifest("entry_point: a\nmin_version: 1.10\n", Path::new("x.yml"));
        assert!(matches!(
            result,
            Err(GatelaunchError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn yaml_manifest_requires_entry_point() {
        let result = parse_yaml_manifest("min_version: \"11\"\n", Path::new("x.yml"));
        assert!(matches!(
            result,
            Err(GatelaunchError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_runtime_command() {
        let manifest = AppManifest {
            runtime: Some(RuntimeCommand {
                command: "  ".to_string(),
                args: vec![],
                pattern: None,
            }),
            ..AppManifest::new("app")
        };
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn validate_drops_blank_download_url() {
        let manifest = AppManifest {
            download_url: Some("  ".to_string()),
            ..AppManifest::new("app")
        };
        assert!(manifest.validate().unwrap().download_url.is_none());
    }

    #[test]
    fn overrides_replace_fields() {
        let manifest = AppManifest::new("app")
            .with_overrides(Some("other".to_string()), Some("11".to_string()));
        assert_eq!(manifest.entry_point, "other");
        assert_eq!(manifest.min_version, "11");

        let manifest = AppManifest::new("app").with_overrides(None, None);
        assert_eq!(manifest.entry_point, "app");
        assert_eq!(manifest.min_version, DEFAULT_MIN_VERSION);
    }

    #[test]
    fn runtime_display_name_falls_back_to_command() {
        let manifest = AppManifest {
            runtime: Some(RuntimeCommand {
                command: "node".to_string(),
                args: vec!["--version".to_string()],
                pattern: None,
            }),
            ..AppManifest::new("app")
        };
        assert_eq!(manifest.runtime_display_name(), "node");
        assert!(manifest.download_link().is_none());
    }

    #[test]
    fn missing_runtime_section_probes_java() {
        let manifest = AppManifest::new("app");
        assert_eq!(manifest.runtime_command(), RuntimeCommand::java());
        assert_eq!(manifest.runtime_display_name(), "Java");
        assert_eq!(manifest.download_link().as_deref(), Some(DEFAULT_DOWNLOAD_URL));
    }

    #[test]
    fn java_probe_uses_quoted_version_pattern() {
        let java = RuntimeCommand::java();
        assert_eq!(java.display_command(), "java -version");
        assert_eq!(java.pattern.as_deref(), Some(JAVA_VERSION_PATTERN));
        assert_eq!(java.version_pattern(), JAVA_VERSION_PATTERN);
    }

    #[test]
    fn configured_java_command_gets_java_pattern() {
        let runtime = RuntimeCommand {
            command: "/opt/jdk/bin/java".to_string(),
            args: vec!["-version".to_string()],
            pattern: None,
        };
        assert_eq!(runtime.version_pattern(), JAVA_VERSION_PATTERN);
    }

    #[test]
    fn custom_runtime_pattern_selection() {
        let mut runtime = RuntimeCommand {
            command: "node".to_string(),
            args: vec!["--version".to_string()],
            pattern: None,
        };
        assert_eq!(runtime.version_pattern(), DEFAULT_VERSION_PATTERN);

        runtime.pattern = Some(r"v(\S+)".to_string());
        assert_eq!(runtime.version_pattern(), r"v(\S+)");
    }

    #[test]
    fn discover_prefers_yaml_over_legacy() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("application.main"), "legacy\n").unwrap();
        fs::write(temp.path().join("gatelaunch.yml"), "entry_point: modern\n").unwrap();

        let found = discover_manifest(temp.path()).unwrap();
        assert!(found.ends_with("gatelaunch.yml"));
    }

    #[test]
    fn discover_finds_nothing_in_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(discover_manifest(temp.path()).is_none());
    }

    #[test]
    fn load_manifest_legacy_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("application.main");
        fs::write(&path, "gatelaunch.echo\n1.8.0_101\n").unwrap();

        let manifest = load_manifest(&path).unwrap();
        assert_eq!(manifest.entry_point, "gatelaunch.echo");
        assert_eq!(manifest.min_version, "1.8.0_101");
    }

    #[test]
    fn load_manifest_legacy_file_with_bom() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("application.main");
        fs::write(&path, "\u{feff}gatelaunch.echo\n").unwrap();

        let manifest = load_manifest(&path).unwrap();
        assert_eq!(manifest.entry_point, "gatelaunch.echo");
    }

    #[test]
    fn load_manifest_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_manifest(&temp.path().join("gatelaunch.yml"));
        assert!(matches!(result, Err(GatelaunchError::ConfigNotFound { .. })));
    }
}
