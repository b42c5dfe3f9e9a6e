//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `daily_siqr.csv`
//! - `transitions.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DailySiqrRow, OutputResult, TransitionRow};

pub const DAILY_SIQR_FILE: &str = "daily_siqr.csv";
pub const TRANSITIONS_FILE: &str = "transitions.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    daily:       Writer<File>,
    transitions: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (truncating existing ones) and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut daily = Writer::from_path(dir.join(DAILY_SIQR_FILE))?;
        daily.write_record(["week", "weekday", "day", "susceptible", "infected", "quarantined", "recovered"])?;

        let mut transitions = Writer::from_path(dir.join(TRANSITIONS_FILE))?;
        transitions.write_record(["agent_id", "role", "from", "to", "week", "weekday", "time"])?;

        Ok(Self { daily, transitions, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_daily_siqr(&mut self, row: &DailySiqrRow) -> OutputResult<()> {
        self.daily.write_record(&[
            row.week.to_string(),
            row.weekday.name().to_owned(),
            row.day.to_string(),
            row.susceptible.to_string(),
            row.infected.to_string(),
            row.quarantined.to_string(),
            row.recovered.to_string(),
        ])?;
        Ok(())
    }

    fn write_transition(&mut self, row: &TransitionRow) -> OutputResult<()> {
        self.transitions.write_record(&[
            row.agent_id.to_string(),
            row.role.to_string(),
            row.from.to_string(),
            row.to.to_string(),
            row.week.to_string(),
            row.weekday.name().to_owned(),
            row.time.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.daily.flush()?;
        self.transitions.flush()?;
        Ok(())
    }
}
