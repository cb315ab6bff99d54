use arclib_export::build::build_all;
use arclib_export::config::{read_configuration, ExportConfig};
use arclib_export::export::export_all;
use arclib_export::toolchain::locate_build_tool;
use clap::Parser;
use log::{error, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Export settings file (RON)
    #[clap(value_parser)]
    config: PathBuf,
    /// Rebuild every configuration with crossbuild before copying
    #[clap(long)]
    build: bool,
    /// Only log warnings and errors
    #[clap(long)]
    quiet: bool,
}

/// Publishes the built MSP430 libraries and their headers to the
/// shared software tree, optionally rebuilding them first.
fn main() {
    let args = Args::parse();
    let level = if args.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize the terminal logger");

    std::process::exit(run(&args));
}

fn run(args: &Args) -> i32 {
    let config = match read_configuration(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    if args.build {
        if let Err(failure) = build_pass(&config) {
            return failure;
        }
    }

    if let Err(e) = export_all(&config) {
        error!("{}", e);
        return 1;
    }
    0
}

/// Locates the newest installed builder and builds every
/// configuration, mapping any failure to the exit code to propagate.
fn build_pass(config: &ExportConfig) -> Result<(), i32> {
    let tool = match locate_build_tool(&config.toolchain_root, &config.product_prefix) {
        Ok(tool) => tool,
        Err(e) => {
            error!("{}", e);
            return Err(1);
        }
    };
    info!(
        "Using {} version {} at {}",
        config.product_prefix,
        tool.version,
        tool.install_dir.display()
    );

    build_all(&tool, config).map_err(|failure| {
        error!("{}", failure);
        failure.exit_code()
    })
}
