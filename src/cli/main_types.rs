use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "leadgen-cli")]
#[command(about = "Command line client for the lead-generation search webhook")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the production webhook endpoint (staging or mock targets)
    #[arg(long, global = true, env = "LEADGEN_WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a lead search built from flags
    Submit {
        /// Comma-separated business types (e.g. "Cafes, Bakeries")
        #[arg(long)]
        business_name: String,
        /// Target location
        #[arg(long)]
        location: String,
        /// Paging offset, a non-negative multiple of 20
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        start: String,
        /// Enable the minimum-reviews/minimum-rating filters
        #[arg(long)]
        enable_filters: bool,
        /// Minimum review count (required with --enable-filters)
        #[arg(long)]
        min_reviews: Option<String>,
        /// Minimum rating, 1 to 5 (required with --enable-filters)
        #[arg(long)]
        min_ratings: Option<String>,
        /// Validate and print the payload without sending anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Fill in the search form interactively and submit
    Form,
}
