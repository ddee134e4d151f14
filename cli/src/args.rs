use clap::Parser;
use std::path::PathBuf;

// Build information - Create a static version string at compile time

// Macro to create the version string at compile time
macro_rules! version_string {
    () => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            "\nCommit: ",
            env!("GIT_COMMIT_HASH"),
            " (",
            env!("GIT_BRANCH"),
            ")\nBuilt: ",
            env!("BUILD_DATE")
        )
    };
}

/// Arbor CLI - Tree data importer for the Arbor record store
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(version = version_string!())]
#[command(
    about = "Resolve and load tree export data into a target Arbor environment",
    long_about = None
)]
pub struct Cli {
    /// Target environment URL (e.g., http://localhost:8080)
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// Host address (alternative to URL)
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Port number (default: 8080)
    #[arg(long = "port", default_value_t = 8080)]
    pub port: u16,

    /// JWT authentication token
    #[arg(long = "token")]
    pub token: Option<String>,

    /// HTTP Basic Auth username
    #[arg(long = "username")]
    pub username: Option<String>,

    /// HTTP Basic Auth password
    #[arg(long = "password")]
    pub password: Option<String>,

    /// Tree export file to resolve
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Tree export plan listing multiple files
    #[arg(short = 'p', long = "plan")]
    pub plan: Option<PathBuf>,

    /// Write resolved documents to this directory instead of stdout
    #[arg(long = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(long = "config", default_value = "~/.arbor/config.toml")]
    pub config: PathBuf,

    /// HTTP request timeout in seconds (overrides config)
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Connection timeout in seconds (TCP + TLS handshake, default: 10)
    #[arg(
        long = "connection-timeout",
        value_name = "SECONDS",
        default_value_t = 10
    )]
    pub connection_timeout: u64,

    /// Maximum retry attempts for the metadata query (overrides config)
    #[arg(long = "max-retries")]
    pub max_retries: Option<u32>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
