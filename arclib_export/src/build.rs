//! Sequential invocation of the CrossStudio builder.
//!
//! Each configuration is built with one `crossbuild` run. The first
//! non-zero exit status stops the whole pass and its code becomes the
//! exit code of the tool. No retries.

use crate::config::ExportConfig;
use crate::toolchain::BuildTool;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::process::Command;

/// Why a build pass stopped early.
#[derive(Debug)]
pub enum BuildFailure {
    /// The builder could not be started at all.
    Launch {
        configuration: String,
        cause: String,
    },
    /// The builder ran and exited with a non-zero status.
    Failed { configuration: String, code: i32 },
}

impl BuildFailure {
    /// Exit code the tool propagates to its caller.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildFailure::Launch { .. } => 1,
            BuildFailure::Failed { code, .. } => *code,
        }
    }
}

impl Display for BuildFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildFailure::Launch {
                configuration,
                cause,
            } => write!(
                f,
                "Failed to launch the builder for {}: {}",
                configuration, cause
            ),
            BuildFailure::Failed {
                configuration,
                code,
            } => write!(f, "Build failed for {} with exit code {}", configuration, code),
        }
    }
}

impl Error for BuildFailure {}

/// Builds every configuration of the settings record, in order.
///
/// Stops at the first failing configuration; the remaining ones are
/// neither built nor touched.
pub fn build_all(tool: &BuildTool, config: &ExportConfig) -> Result<(), BuildFailure> {
    for configuration in &config.configurations {
        build_one(tool, config, configuration)?;
    }
    Ok(())
}

fn build_one(
    tool: &BuildTool,
    config: &ExportConfig,
    configuration: &str,
) -> Result<(), BuildFailure> {
    info!("Building {} for {}", config.project, configuration);
    let status = Command::new(tool.executable())
        .current_dir(&config.input_dir)
        .arg("-config")
        .arg(configuration)
        .arg(&config.project)
        .status()
        .map_err(|e| BuildFailure::Launch {
            configuration: configuration.to_string(),
            cause: e.to_string(),
        })?;

    if !status.success() {
        // A builder killed by a signal has no code; report 1.
        return Err(BuildFailure::Failed {
            configuration: configuration.to_string(),
            code: status.code().unwrap_or(1),
        });
    }
    Ok(())
}
