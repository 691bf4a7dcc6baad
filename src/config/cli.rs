use clap::Parser;

/// Demo CLI for exercising the library service against the in-memory store.
#[derive(Debug, Clone, Parser)]
#[command(name = "libris")]
#[command(about = "Library operations service demo")]
pub struct CliConfig {
    /// Optional TOML configuration file with [policy] and [gateway] sections
    #[arg(long)]
    pub config: Option<String>,

    /// Payment gateway endpoint; overrides the config file value
    #[arg(long)]
    pub gateway_endpoint: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}
