use csv::StringRecord;

use crate::{errors::Error, model::movie::Movie};

/// Positions of the fields the pipeline reads, resolved from the dataset
/// header once per run. Any other columns in the file are ignored.
#[derive(Debug, Clone, Copy)]
pub struct DatasetColumns {
    title_year: usize,
    director_name: usize,
    movie_title: usize,
    imdb_score: usize,
}

impl DatasetColumns {
    pub fn from_headers(headers: &StringRecord) -> Result<Self, Error> {
        Ok(DatasetColumns {
            title_year: Self::position(headers, "title_year")?,
            director_name: Self::position(headers, "director_name")?,
            movie_title: Self::position(headers, "movie_title")?,
            imdb_score: Self::position(headers, "imdb_score")?,
        })
    }

    fn position(headers: &StringRecord, name: &'static str) -> Result<usize, Error> {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or(Error::MissingColumn(name))
    }
}

#[derive(Debug)]
pub struct RecordExtractor {}

impl RecordExtractor {
    /// Builds the director/movie pair for one dataset row. Returns `None`
    /// when the row is excluded by the year filter.
    pub fn extract_movie(
        record: &StringRecord,
        columns: &DatasetColumns,
        line: u64,
        min_year: u32,
    ) -> Result<Option<(String, Movie)>, Error> {
        let year = Self::extract_year(Self::field(record, columns.title_year), line)?;
        if year < i64::from(min_year) {
            return Ok(None);
        }

        let director = Self::field(record, columns.director_name).to_string();
        let title = Self::normalize_title(Self::field(record, columns.movie_title));
        let score = Self::extract_score(Self::field(record, columns.imdb_score), line)?;

        Ok(Some((
            director,
            Movie {
                title,
                // The year filter already rejected anything below min_year,
                // so the value is non-negative here.
                year: year as u32,
                score,
            },
        )))
    }

    // Rows shorter than the header read as empty fields.
    fn field<'r>(record: &'r StringRecord, index: usize) -> &'r str {
        record.get(index).unwrap_or("")
    }

    /// An empty year field means the release year is unknown; it maps to 0,
    /// which the year filter always rejects. Anything non-empty must parse
    /// as an integer.
    fn extract_year(raw: &str, line: u64) -> Result<i64, Error> {
        if raw.is_empty() {
            return Ok(0);
        }

        raw.trim()
            .parse::<i64>()
            .map_err(|_| Error::MalformedRecord {
                line,
                field: "title_year",
                value: raw.to_string(),
            })
    }

    fn extract_score(raw: &str, line: u64) -> Result<f64, Error> {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| Error::MalformedRecord {
                line,
                field: "imdb_score",
                value: raw.to_string(),
            })
    }

    /// Titles in the source dataset carry a trailing stray character, so the
    /// last character of the trimmed title is dropped unconditionally, even
    /// when the artifact is absent and a real letter gets cut. Known quirk
    /// of this dataset, kept as-is.
    fn normalize_title(raw: &str) -> String {
        let mut title = raw.trim().to_string();
        title.pop();
        title
    }
}
