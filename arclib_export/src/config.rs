//! This module defines the settings of an export run.
//! The settings are a flat record read once at start-up.
//! They are serialized in the RON format.

use arclib_traits::{ArcError, ArcResult};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

// The settings Serialization format is as follows:
// (
//   basename: "Error",
//   project: "Error.hzp",
//   configurations: ["MSP430 printf Release", ...],
//   headers: ["Error.h"],
// )
// Every field is optional and falls back to its default below.

/// Immutable settings for one export run.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ExportConfig {
    /// Where the per-configuration output folders and the headers live.
    pub input_dir: PathBuf,
    /// Root of the shared software tree receiving `lib/` and `include/`.
    pub prefix: PathBuf,
    /// Library base name; names the built `.hza` inside each output folder.
    pub basename: String,
    /// Ordered build configuration names.
    pub configurations: Vec<String>,
    /// Public header files copied to the include directory.
    pub headers: Vec<String>,
    /// CrossStudio project file handed to the builder.
    pub project: String,
    /// Installation root scanned for versioned CrossStudio folders.
    pub toolchain_root: PathBuf,
    /// Product name preceding the version number in installation folder names.
    pub product_prefix: String,
    /// Output folders are named `<basename> <configuration>` instead of
    /// the bare configuration name.
    pub prefixed_output_dirs: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            input_dir: PathBuf::from("."),
            prefix: PathBuf::from("Z:/Software"),
            basename: "Error".to_string(),
            configurations: vec![
                "MSP430 printf Release".to_string(),
                "MSP430 printf Debug".to_string(),
                "MSP430 SDcard Release".to_string(),
                "MSP430 SDcard Debug".to_string(),
            ],
            headers: vec!["Error.h".to_string()],
            project: "Error.hzp".to_string(),
            toolchain_root: PathBuf::from("C:/Program Files (x86)/Rowley Associates Limited"),
            product_prefix: "CrossWorks for MSP430".to_string(),
            prefixed_output_dirs: false,
        }
    }
}

impl ExportConfig {
    /// Destination directory for the renamed `.hza` artifacts.
    pub fn lib_dir(&self) -> PathBuf {
        self.prefix.join("lib")
    }

    /// Destination directory for the public headers.
    pub fn include_dir(&self) -> PathBuf {
        self.prefix.join("include")
    }

    pub fn deserialize_ron(ron: &str) -> ArcResult<Self> {
        ron::from_str(ron)
            .map_err(|e| ArcError::from("Syntax error in settings").add_cause(&e.to_string()))
    }

    pub fn serialize_ron(&self) -> String {
        let pretty = PrettyConfig::default();
        ron::ser::to_string_pretty(&self, pretty).unwrap()
    }
}

pub fn read_configuration(config_filename: &Path) -> ArcResult<ExportConfig> {
    let config_content = read_to_string(config_filename).map_err(|e| {
        ArcError::from(format!(
            "Failed to read settings file: {:?}",
            &config_filename
        ))
        .add_cause(&e.to_string())
    })?;
    ExportConfig::deserialize_ron(&config_content)
}

// tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip() {
        let config = ExportConfig::default();
        let serialized = config.serialize_ron();
        let deserialized =
            ExportConfig::deserialize_ron(&serialized).expect("Failed to reparse settings");
        assert_eq!(config.basename, deserialized.basename);
        assert_eq!(config.configurations, deserialized.configurations);
        assert_eq!(config.prefix, deserialized.prefix);
    }

    #[test]
    fn test_partial_settings_fall_back_to_defaults() {
        let config = ExportConfig::deserialize_ron(r#"(basename: "Counter")"#)
            .expect("Failed to parse settings");
        assert_eq!(config.basename, "Counter");
        assert_eq!(config.configurations.len(), 4);
        assert_eq!(config.headers, vec!["Error.h".to_string()]);
    }

    #[test]
    fn test_derived_directories() {
        let config = ExportConfig {
            prefix: PathBuf::from("/srv/software"),
            ..Default::default()
        };
        assert_eq!(config.lib_dir(), PathBuf::from("/srv/software/lib"));
        assert_eq!(config.include_dir(), PathBuf::from("/srv/software/include"));
    }

    #[test]
    fn test_syntax_error_is_reported() {
        assert!(ExportConfig::deserialize_ron("(basename: ").is_err());
    }
}
