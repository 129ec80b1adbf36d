use std::path::Path;

mod config;
mod errors;
mod extractors;
mod loaders;
mod model;
mod persisters;
mod rankers;

pub use config::{Config, MIN_MOVIES, MIN_YEAR};
pub use errors::Error;
pub use loaders::dataset_loader::DatasetLoader;
pub use model::director_group::DirectorGroup;
pub use model::movie::Movie;
pub use model::ranked_entry::RankedEntry;
pub use persisters::csv_writer::CsvWriter;
pub use rankers::score_ranker::ScoreRanker;

/// Runs the whole pipeline with the default thresholds: group the dataset's
/// qualifying movies by director, then rank directors by average score.
pub fn run(dataset_path: &Path) -> Result<Vec<RankedEntry>, Error> {
    run_with_config(dataset_path, &Config::default())
}

pub fn run_with_config(dataset_path: &Path, config: &Config) -> Result<Vec<RankedEntry>, Error> {
    let groups = DatasetLoader::group_movies_by_director(dataset_path, config)?;
    log::info!(
        "Grouped movies under {} directors from {}",
        groups.len(),
        dataset_path.display()
    );

    let ranking = ScoreRanker::rank_directors(groups, config)?;
    log::info!(
        "Ranked {} directors with at least {} movies released since {}",
        ranking.len(),
        config.min_movies,
        config.min_year
    );

    Ok(ranking)
}
