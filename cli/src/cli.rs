use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "assetview")]
#[command(version)]
#[command(about = "Browse a paginated host/asset inventory from the terminal")]
pub struct Cli {
    /// Base URL of the asset API
    #[arg(long, env = "ASSETVIEW_API_URL", default_value = "http://localhost:8080", global = true)]
    pub api_url: String,

    /// Number of assets requested per page
    #[arg(
        long,
        env = "ASSETVIEW_PAGE_SIZE",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..),
        global = true
    )]
    pub page_size: u32,

    /// Give up on a request after this many seconds (no limit by default)
    #[arg(long, env = "ASSETVIEW_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Write diagnostic logs to this file (controlled by RUST_LOG)
    #[arg(long, env = "ASSETVIEW_LOG_FILE", global = true)]
    pub log_file: Option<String>,

    /// the command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse assets interactively
    View {
        /// Initial hostname filter
        #[arg(short, long, default_value = "")]
        filter: String,

        /// Start in grid (infinite scroll) mode instead of list mode
        #[arg(short, long, default_value_t = false)]
        grid: bool,

        /// Rows from the end of the grid at which the next page is loaded
        #[arg(long, default_value_t = 5)]
        scroll_threshold: usize,
    },

    /// Print one page of assets, sorted by host
    List {
        /// Hostname filter
        #[arg(short, long, default_value = "")]
        filter: String,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
