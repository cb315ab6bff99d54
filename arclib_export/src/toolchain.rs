//! Discovery of the CrossStudio command line builder.
//!
//! Installations live side by side under one root, one folder per
//! version, e.g. `CrossWorks for MSP430 2.3`. The newest major version
//! wins.

use arclib_traits::{ArcError, ArcResult};
use log::debug;
use std::env::consts::EXE_SUFFIX;
use std::fs;
use std::path::{Path, PathBuf};

/// A located CrossStudio installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTool {
    pub install_dir: PathBuf,
    pub version: u32,
}

impl BuildTool {
    /// Path of the `crossbuild` executable inside this installation.
    pub fn executable(&self) -> PathBuf {
        self.install_dir
            .join("bin")
            .join(format!("crossbuild{}", EXE_SUFFIX))
    }
}

/// Scans `root` for installation folders named `<product_prefix> <major>...`
/// and returns the one with the highest major version.
///
/// Comparison is strictly greater-than, so among equal versions the
/// first folder listed wins. An empty scan is an error; the caller
/// never sees a half-constructed path.
pub fn locate_build_tool(root: &Path, product_prefix: &str) -> ArcResult<BuildTool> {
    let entries = fs::read_dir(root).map_err(|e| {
        ArcError::from(format!("Failed to list toolchain root {:?}", root))
            .add_cause(&e.to_string())
    })?;

    let mut best: Option<BuildTool> = None;
    for entry in entries {
        let entry = entry.map_err(|e| {
            ArcError::from(format!("Failed to read an entry under {:?}", root))
                .add_cause(&e.to_string())
        })?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(version) = parse_product_version(name, product_prefix) else {
            continue;
        };
        debug!("Found {} version {} at {:?}", product_prefix, version, entry.path());
        let newer = match &best {
            Some(b) => version > b.version,
            None => true,
        };
        if newer {
            best = Some(BuildTool {
                install_dir: entry.path(),
                version,
            });
        }
    }

    best.ok_or_else(|| {
        ArcError::from(format!(
            "No {:?} installation found under {:?}",
            product_prefix, root
        ))
    })
}

/// Extracts the single digit major version from an installation folder
/// name, e.g. `CrossWorks for MSP430 2.3` -> 2.
fn parse_product_version(name: &str, product_prefix: &str) -> Option<u32> {
    let rest = name.strip_prefix(product_prefix)?.strip_prefix(' ')?;
    rest.chars().next()?.to_digit(10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::create_dir_all;
    use tempfile::TempDir;

    const PRODUCT: &str = "CrossWorks for MSP430";

    fn install(root: &Path, folder: &str) {
        create_dir_all(root.join(folder).join("bin")).expect("could not create install dir");
    }

    #[test]
    fn test_parse_product_version() {
        assert_eq!(parse_product_version("CrossWorks for MSP430 2.3", PRODUCT), Some(2));
        assert_eq!(parse_product_version("CrossWorks for MSP430 4", PRODUCT), Some(4));
        assert_eq!(parse_product_version("CrossWorks for MSP430", PRODUCT), None);
        assert_eq!(parse_product_version("CrossWorks for AVR 3.1", PRODUCT), None);
        assert_eq!(parse_product_version("Notes", PRODUCT), None);
    }

    #[test]
    fn test_highest_version_wins() {
        let tmp_dir = TempDir::new().expect("could not create a tmp dir");
        install(tmp_dir.path(), "CrossWorks for MSP430 3.1");
        install(tmp_dir.path(), "CrossWorks for MSP430 4.0");
        install(tmp_dir.path(), "CrossWorks for AVR 5.0");

        let tool = locate_build_tool(tmp_dir.path(), PRODUCT).expect("no installation found");
        assert_eq!(tool.version, 4);
        assert_eq!(
            tool.install_dir,
            tmp_dir.path().join("CrossWorks for MSP430 4.0")
        );
    }

    #[test]
    fn test_executable_path() {
        let tool = BuildTool {
            install_dir: PathBuf::from("/opt/CrossWorks for MSP430 2.3"),
            version: 2,
        };
        let exe = tool.executable();
        assert!(exe.starts_with("/opt/CrossWorks for MSP430 2.3/bin"));
        assert!(exe
            .file_name()
            .and_then(|n| n.to_str())
            .expect("no file name")
            .starts_with("crossbuild"));
    }

    #[test]
    fn test_no_match_is_an_error() {
        let tmp_dir = TempDir::new().expect("could not create a tmp dir");
        install(tmp_dir.path(), "CrossWorks for AVR 3.0");
        assert!(locate_build_tool(tmp_dir.path(), PRODUCT).is_err());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let tmp_dir = TempDir::new().expect("could not create a tmp dir");
        let missing = tmp_dir.path().join("nowhere");
        assert!(locate_build_tool(&missing, PRODUCT).is_err());
    }
}
