use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "domain-tally",
    about = "Count customers per email domain from a CSV export",
    version,
    long_about = None
)]
pub struct Args {
    /// CSV file with rows of first name, last name, email, gender, IP address
    #[arg(default_value = "customers.csv")]
    pub path: PathBuf,

    /// Number of top domains to display
    #[arg(short, long, default_value_t = 5)]
    pub top: usize,

    /// Display every domain instead of the top entries
    #[arg(long, conflicts_with = "top")]
    pub all: bool,

    /// Abort on the first unreadable line or invalid email instead of skipping it
    #[arg(long)]
    pub fail_fast: bool,

    /// Regular expression an email must match to be counted
    #[arg(short, long)]
    pub email_pattern: Option<String>,

    /// Order domains with equal counts by name
    #[arg(long)]
    pub sort_ties: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
