use clap::{Parser, ValueEnum};

/// Which contract query the response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryKind {
    /// `get_agent_profile`: one profile for a known owner
    Profile,
    /// List of every registered profile
    Profiles,
    /// `get_escrows_as_client`: escrows created by one client
    Escrows,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to .env file (e.g., .env.testnet)
    #[arg(short, long, default_value = ".env")]
    pub env_file: String,

    /// Query the response was produced by
    #[arg(short, long, value_enum)]
    pub query: QueryKind,

    /// Recorded simulation response (JSON), "-" for stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Owner address, required for profile queries
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
