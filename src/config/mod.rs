#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "mixcore")]
#[command(about = "Inspect and resize liquid-mixture snapshots")]
pub struct CliConfig {
    /// Path to a snapshot JSON file
    pub snapshot: String,

    /// Resize the container to this many ml, rescaling the mixture
    #[arg(long)]
    pub resize: Option<f64>,

    /// Write the (possibly resized) state back out as snapshot JSON
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
