use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::{
    config::Config,
    errors::Error,
    extractors::record_extractor::{DatasetColumns, RecordExtractor},
    model::director_group::DirectorGroup,
};

/// Reads the movie-metadata CSV and groups qualifying movies by director.
#[derive(Debug)]
pub struct DatasetLoader {}

impl DatasetLoader {
    pub fn group_movies_by_director(
        dataset_path: &Path,
        config: &Config,
    ) -> Result<Vec<DirectorGroup>, Error> {
        let file = File::open(dataset_path).map_err(|source| Error::DatasetUnavailable {
            path: dataset_path.to_path_buf(),
            source,
        })?;

        Self::group_movies_from_reader(file, config)
    }

    /// Same pipeline over any already-retrieved source, so callers can feed
    /// in-memory fixtures instead of a file on disk.
    ///
    /// Groups come out in first-seen director order and movies within a
    /// group in input row order, which keeps the final ranking reproducible
    /// for equal scores.
    pub fn group_movies_from_reader<R: io::Read>(
        reader: R,
        config: &Config,
    ) -> Result<Vec<DirectorGroup>, Error> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let columns = DatasetColumns::from_headers(csv_reader.headers()?)?;

        let mut groups: Vec<DirectorGroup> = Vec::new();
        let mut group_index: HashMap<String, usize> = HashMap::new();

        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;
            // The header occupies line 1, the first data row line 2.
            let line = row as u64 + 2;

            if let Some((director, movie)) =
                RecordExtractor::extract_movie(&record, &columns, line, config.min_year)?
            {
                match group_index.entry(director) {
                    Entry::Occupied(slot) => groups[*slot.get()].movies.push(movie),
                    Entry::Vacant(slot) => {
                        let group = DirectorGroup {
                            director: slot.key().clone(),
                            movies: vec![movie],
                        };
                        slot.insert(groups.len());
                        groups.push(group);
                    }
                }
            }
        }

        log::debug!("grouped movies under {} directors", groups.len());
        Ok(groups)
    }
}
