use clap::Parser;
use std::path::PathBuf;

const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Show folder structurer for VFX production
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Destination folder to prefill in the Structure tab
    #[arg(value_name = "DEST")]
    pub destination: Option<PathBuf>,

    /// Show name to prefill
    #[arg(short = 's', long = "show", value_name = "NAME")]
    pub show: Option<String>,

    /// Enable logging to file (default: shotsmith.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}
