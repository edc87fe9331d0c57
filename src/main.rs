use clap::{ArgAction, Parser};
use eyre::WrapErr;
use rsampler::config::Config;
use rsampler::{Loader, display};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;
use url::Url;

const DEFAULT_CONFIG: &str = "rsampler.toml";

#[derive(Parser)]
#[command(version, author, about)]
struct Args {
    /// Use FILE instead of rsampler.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Roster endpoint, overriding the configuration
    #[arg(short, long)]
    endpoint: Option<Url>,
    /// Number of students to pick, overriding the configuration
    #[arg(short = 'n', long)]
    count: Option<usize>,
    /// Print the sample as JSON
    #[arg(long)]
    json: bool,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

/// Log events from this crate only, at a level set by the number of `-v`.
fn log_filter(verbose: u8) -> Targets {
    let level = match verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    Targets::new().with_target("rsampler", level)
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(args.verbose))
        .init();
    let mut config = match &args.config {
        Some(file_name) => Config::load(file_name)?,
        None => Config::load_or_default(DEFAULT_CONFIG)?,
    };
    if let Some(endpoint) = args.endpoint {
        config.roster.endpoint = endpoint;
    }
    if let Some(count) = args.count {
        config.roster.count = count;
    }
    let roster = config.roster;
    let loader = match roster.timeout() {
        Some(timeout) => Loader::with_timeout(roster.endpoint, timeout)?,
        None => Loader::new(roster.endpoint),
    };
    info!(endpoint = %loader.endpoint(), count = roster.count, "sampling roster");
    let students = loader
        .sample(roster.count)
        .await
        .wrap_err_with(|| format!("cannot sample students from {}", loader.endpoint()))?;
    if args.json {
        display::display_json(&students)?;
    } else {
        display::display_sample(&students);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        let filter = log_filter(0);
        assert!(filter.would_enable("rsampler::loader", &Level::ERROR));
        assert!(!filter.would_enable("rsampler::loader", &Level::WARN));
    }

    #[test]
    fn verbosity_does_not_leak_to_dependencies() {
        let filter = log_filter(4);
        assert!(filter.would_enable("rsampler::sample", &Level::TRACE));
        assert!(!filter.would_enable("hyper_util::client::legacy", &Level::TRACE));
        assert!(!filter.would_enable("reqwest::connect", &Level::DEBUG));
        assert!(!filter.would_enable("rustls::client", &Level::ERROR));
    }

    #[test]
    fn each_flag_raises_the_level() {
        assert!(log_filter(1).would_enable("rsampler", &Level::WARN));
        assert!(!log_filter(1).would_enable("rsampler", &Level::INFO));
        assert!(log_filter(2).would_enable("rsampler", &Level::INFO));
        assert!(log_filter(3).would_enable("rsampler", &Level::DEBUG));
        assert!(!log_filter(3).would_enable("rsampler", &Level::TRACE));
    }
}
