//! Medication logging and history.

use clap::Subcommand;
use luna_core::tracking::parse_time;
use luna_core::{Categorical, Config, MedicationDraft, MedicationType};

use super::{date_arg, session_journal, today, CmdResult};

#[derive(Subcommand)]
pub enum MedicationAction {
    /// Log a medication intake
    Log {
        /// Medication name
        #[arg(long)]
        name: String,
        /// birthControl, painkillers, ironSupplements, herbalRemedies or other
        #[arg(long, default_value = "birthControl")]
        kind: String,
        /// e.g. 400mg, 1 tablet
        #[arg(long)]
        dosage: Option<String>,
        /// Mark as a daily recurring medication taken at HH:MM
        #[arg(long, value_name = "HH:MM")]
        scheduled: Option<String>,
        /// Date taken (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show medication history
    History {
        /// Start from an empty journal instead of the sample data
        #[arg(long)]
        no_fixtures: bool,
        #[arg(long)]
        json: bool,
    },
    /// List medication types
    Options,
}

pub fn run(action: MedicationAction) -> CmdResult {
    match action {
        MedicationAction::Log {
            name,
            kind,
            dosage,
            scheduled,
            date,
            notes,
        } => {
            let mut draft = MedicationDraft::new(today());
            draft.name = name;
            draft.kind = kind.parse::<MedicationType>()?;
            draft.dosage = dosage.unwrap_or_default();
            draft.date = date_arg(date.as_deref())?;
            draft.notes = notes.unwrap_or_default();
            if let Some(time) = scheduled {
                draft.is_scheduled = true;
                draft.scheduled_time = parse_time(&time)?;
            }

            let entry = draft.submit(today())?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
            Ok(())
        }
        MedicationAction::History { no_fixtures, json } => {
            let config = Config::load_or_default();
            let journal = session_journal(&config, no_fixtures);
            let rows = journal.medication_history();

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("No medications logged yet.");
            } else {
                for row in rows {
                    println!("{}", row.render_line());
                }
            }
            Ok(())
        }
        MedicationAction::Options => {
            for kind in MedicationType::ALL {
                println!("{} {:<16} {}", kind.emoji(), kind.as_str(), kind.label());
            }
            Ok(())
        }
    }
}
