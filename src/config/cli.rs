use clap::Parser;
use std::path::PathBuf;

/// Command-line flags. Anything left unset falls back to the TOML file, then
/// to the built-in defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "testimonials")]
#[command(about = "Collects visitor testimonials and serves aggregated statistics")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory holding the submission history
    #[arg(long, env = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// File name of the submission history inside the data directory
    #[arg(long)]
    pub data_file: Option<String>,

    /// Root of the static landing page and assets
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Maximum accepted request body in bytes
    #[arg(long)]
    pub body_limit: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
