use csv::Writer;

use crate::{errors::Error, model::ranked_entry::RankedEntry};

pub struct CsvWriter {}

impl CsvWriter {
    /// Writes the ranking to `file_name` with a `Director,AverageScore`
    /// header, one row per ranked director.
    pub fn save_ranking_to_csv(ranking: &[RankedEntry], file_name: &str) -> Result<(), Error> {
        let mut writer = Writer::from_path(file_name)?;

        writer.write_record(RankedEntry::csv_titles())?;
        for entry in ranking {
            writer.write_record(entry.to_csvable_array())?;
        }

        writer.flush()?;
        Ok(())
    }
}
