use std::path::Path;

use time::macros::format_description;
use tracing::Dispatch;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

use crate::stats::DomainCount;

/// Builds the log subscriber, installs it globally and hands it back so it
/// can be passed to the importer.
pub fn setup_logging(verbose: bool) -> Dispatch {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let timer = LocalTime::new(format_description!(
        "[year]/[month]/[day] [hour]:[minute]:[second]"
    ));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    let dispatch = Dispatch::new(subscriber);
    if let Err(e) = tracing::dispatcher::set_global_default(dispatch.clone()) {
        eprintln!("Failed to install log subscriber: {}", e);
    }
    dispatch
}

pub fn format_number(num: u64) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if !args.all && args.top == 0 {
        anyhow::bail!("--top must be greater than 0");
    }

    Ok(())
}

pub fn print_domain_counts(path: &Path, counts: &[DomainCount], limit: Option<usize>) {
    let customers: u64 = counts.iter().map(|entry| entry.count).sum();

    println!("\n--- Email domains in {} ---", path.display());
    println!(
        "Total unique domains found: {}",
        format_number(counts.len() as u64)
    );
    println!("Customers counted: {}", format_number(customers));

    let shown = limit.map_or(counts.len(), |limit| limit.min(counts.len()));
    if limit.is_some() {
        println!("\nTop {} domains:", shown);
    } else {
        println!("\nAll domains:");
    }

    for entry in counts.iter().take(shown) {
        println!(
            "- {}: {} customers",
            entry.domain,
            format_number(entry.count)
        );
    }
}
