//! Copies built artifacts and public headers into the shared tree.

use crate::config::ExportConfig;
use arclib_traits::{ArcError, ArcResult};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Destination file name for one configuration's artifact.
///
/// The first word of the configuration names the target and is
/// dropped; the rest joins the basename with underscores. Basename
/// `Error` and configuration `MSP430 printf Release` give
/// `Error_printf_Release.hza`.
pub fn artifact_name(basename: &str, configuration: &str) -> String {
    let words: Vec<&str> = configuration.split_whitespace().skip(1).collect();
    format!("{}_{}.hza", basename, words.join("_"))
}

/// Folder the builder wrote this configuration's output into.
pub fn output_dir(config: &ExportConfig, configuration: &str) -> PathBuf {
    if config.prefixed_output_dirs {
        config
            .input_dir
            .join(format!("{} {}", config.basename, configuration))
    } else {
        config.input_dir.join(configuration)
    }
}

fn copy_file(inpath: &Path, outpath: &Path) -> ArcResult<()> {
    info!("Copying {} to {}", inpath.display(), outpath.display());
    fs::copy(inpath, outpath).map_err(|e| {
        ArcError::from(format!("Failed to copy {:?} to {:?}", inpath, outpath))
            .add_cause(&e.to_string())
    })?;
    Ok(())
}

fn ensure_dir(dir: &Path) -> ArcResult<()> {
    fs::create_dir_all(dir).map_err(|e| {
        ArcError::from(format!("Failed to create {:?}", dir)).add_cause(&e.to_string())
    })
}

/// Copies one artifact per configuration to the library directory, in
/// configuration order. Existing artifacts are overwritten.
pub fn export_artifacts(config: &ExportConfig) -> ArcResult<()> {
    let lib_dir = config.lib_dir();
    ensure_dir(&lib_dir)?;
    for configuration in &config.configurations {
        let inpath = output_dir(config, configuration).join(format!("{}.hza", config.basename));
        let outpath = lib_dir.join(artifact_name(&config.basename, configuration));
        copy_file(&inpath, &outpath)?;
    }
    Ok(())
}

/// Copies the public headers to the include directory.
pub fn export_headers(config: &ExportConfig) -> ArcResult<()> {
    let include_dir = config.include_dir();
    ensure_dir(&include_dir)?;
    for header in &config.headers {
        copy_file(&config.input_dir.join(header), &include_dir.join(header))?;
    }
    Ok(())
}

/// Full export pass: every artifact first, the headers last.
pub fn export_all(config: &ExportConfig) -> ArcResult<()> {
    export_artifacts(config)?;
    export_headers(config)
}
