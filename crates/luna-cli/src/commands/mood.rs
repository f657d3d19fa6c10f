//! Mood & energy logging.

use clap::Subcommand;
use luna_core::{Categorical, Config, Energy, Mood, MoodDraft, TrendChart};

use super::trend::print_chart;
use super::{date_arg, session_journal, today, CmdResult};

#[derive(Subcommand)]
pub enum MoodAction {
    /// Log a mood & energy check-in and show the updated trend
    Log {
        /// happy, relaxed, sad, irritable, emotional or anxious
        #[arg(long, default_value = "happy")]
        mood: String,
        /// high, normal, low or exhausted
        #[arg(long, default_value = "normal")]
        energy: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Start from an empty journal instead of the sample data
        #[arg(long)]
        no_fixtures: bool,
        /// Print the entry and trend as one JSON object
        #[arg(long)]
        json: bool,
    },
    /// List mood and energy options
    Options,
}

pub fn run(action: MoodAction) -> CmdResult {
    match action {
        MoodAction::Log {
            mood,
            energy,
            date,
            notes,
            no_fixtures,
            json,
        } => {
            let config = Config::load_or_default();
            let mut journal = session_journal(&config, no_fixtures);

            let mut draft = MoodDraft::new(today());
            draft.mood = mood.parse::<Mood>()?;
            draft.energy = energy.parse::<Energy>()?;
            draft.date = date_arg(date.as_deref())?;
            draft.notes = notes.unwrap_or_default();

            let entry = draft.submit(today());
            if !json {
                println!(
                    "Logged {} {} / {} {} on {}",
                    entry.mood.known().map(|m| m.emoji()).unwrap_or(""),
                    entry.mood.label(),
                    entry.energy.known().map(|e| e.emoji()).unwrap_or(""),
                    entry.energy.label(),
                    entry.date
                );
            }
            journal.record_mood(entry.clone());

            let chart = TrendChart::new(journal.trend_with_format(&config.chart.date_format));
            if json {
                let logged = serde_json::json!({ "entry": entry, "trend": chart });
                println!("{}", serde_json::to_string_pretty(&logged)?);
                return Ok(());
            }
            print_chart(chart, &config, false)
        }
        MoodAction::Options => {
            println!("Mood:");
            for mood in Mood::ALL {
                println!("  {} {:<10} {}", mood.emoji(), mood.as_str(), mood.label());
            }
            println!("Energy:");
            for energy in Energy::ALL {
                println!("  {} {:<10} {}", energy.emoji(), energy.as_str(), energy.label());
            }
            Ok(())
        }
    }
}
