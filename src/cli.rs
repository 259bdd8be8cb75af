use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Stop polling after this many seconds
    #[arg(long)]
    pub duration: Option<u64>,

    /// Run a single cycle and exit
    #[arg(long, default_value_t = false, conflicts_with = "duration")]
    pub once: bool,

    #[command(flatten)]
    pub feed: FeedOverride,

    #[arg(short, long, default_value_t = log::LevelFilter::Info)]
    pub logging_level: log::LevelFilter,

    #[arg(long)]
    pub config_file: std::path::PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct FeedOverride {
    /// Read the aircraft document from this file instead of the configured URL
    #[arg(long)]
    pub read_feed_file: Option<std::path::PathBuf>,
}
