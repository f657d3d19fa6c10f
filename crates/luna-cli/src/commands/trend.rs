//! Trend command: mood & energy chart over logged check-ins.

use std::path::PathBuf;

use clap::Args;
use luna_core::{build_series_with_format, Config, MoodEntry, TrendChart};

use super::{session_journal, CmdResult};

#[derive(Args)]
pub struct TrendArgs {
    /// Print chart data as JSON instead of a text chart
    #[arg(long)]
    json: bool,
    /// Start from an empty journal instead of the sample data
    #[arg(long)]
    no_fixtures: bool,
    /// Read check-ins from a JSON array instead of the journal
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
}

pub fn run(args: TrendArgs) -> CmdResult {
    let config = Config::load_or_default();

    let points = match &args.input {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let entries: Vec<MoodEntry> = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), entries = entries.len(), "read check-ins from file");
            build_series_with_format(&entries, &config.chart.date_format)
        }
        None => session_journal(&config, args.no_fixtures)
            .trend_with_format(&config.chart.date_format),
    };

    print_chart(TrendChart::new(points), &config, args.json)
}

pub fn print_chart(chart: TrendChart, config: &Config, json: bool) -> CmdResult {
    if json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else {
        let chart = chart.with_bar_width(config.chart.bar_width as usize);
        println!("{}", chart.render_ascii());
    }
    Ok(())
}
