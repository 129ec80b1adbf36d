use crate::{
    config::Config,
    errors::Error,
    model::{director_group::DirectorGroup, ranked_entry::RankedEntry},
};

/// Turns director groups into a best-first average-score ranking.
#[derive(Debug)]
pub struct ScoreRanker {}

impl ScoreRanker {
    /// Drops directors with fewer than `config.min_movies` movies, averages
    /// the scores of the rest, and sorts descending. The sort is stable, so
    /// directors with equal averages keep their group order.
    pub fn rank_directors(
        groups: Vec<DirectorGroup>,
        config: &Config,
    ) -> Result<Vec<RankedEntry>, Error> {
        let mut ranking = Vec::new();
        for group in groups {
            if group.movies.len() < config.min_movies {
                continue;
            }

            let average_score = Self::calc_mean_score(&group)?;
            ranking.push(RankedEntry {
                director: group.director,
                average_score,
            });
        }

        ranking.sort_by(|a, b| b.average_score.total_cmp(&a.average_score));
        Ok(ranking)
    }

    /// Arithmetic mean of the group's scores, rounded to one decimal place.
    /// A group with no movies cannot be averaged; the size filter above
    /// keeps that from happening as long as `min_movies` is at least 1.
    fn calc_mean_score(group: &DirectorGroup) -> Result<f64, Error> {
        if group.movies.is_empty() {
            return Err(Error::EmptyGroup(group.director.clone()));
        }

        let total: f64 = group.movies.iter().map(|movie| movie.score).sum();
        let mean = total / group.movies.len() as f64;
        Ok(round_to_one_decimal(mean))
    }
}

// Rounds on the exact decimal expansion of the value, ties to the even
// neighbor: 6.25 -> 6.2, 6.75 -> 6.8. Scaling by 10 before rounding would
// double-round through the multiplication and shift some edge values.
fn round_to_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::movie::Movie;

    fn group_with_scores(director: &str, scores: &[f64]) -> DirectorGroup {
        DirectorGroup {
            director: director.to_string(),
            movies: scores
                .iter()
                .enumerate()
                .map(|(i, &score)| Movie {
                    title: format!("{} #{}", director, i + 1),
                    year: 2000 + i as u32,
                    score,
                })
                .collect(),
        }
    }

    fn rank(groups: Vec<DirectorGroup>) -> Vec<RankedEntry> {
        ScoreRanker::rank_directors(groups, &Config::default()).unwrap()
    }

    #[test]
    fn averages_round_to_one_decimal() {
        let ranking = rank(vec![group_with_scores("Ava", &[5.0, 6.0, 7.0, 8.0])]);
        assert_eq!(ranking[0].average_score, 6.5);
    }

    #[test]
    fn halfway_averages_round_to_even() {
        assert_eq!(round_to_one_decimal(6.25), 6.2);
        assert_eq!(round_to_one_decimal(6.75), 6.8);
    }

    #[test]
    fn rounding_follows_the_stored_double_not_the_literal() {
        // The closest double to 8.35 is a hair below the halfway point.
        assert_eq!(round_to_one_decimal(8.35), 8.3);
    }

    #[test]
    fn directors_below_the_movie_threshold_are_dropped() {
        let ranking = rank(vec![
            group_with_scores("Prolific", &[5.0, 5.0, 5.0, 5.0]),
            group_with_scores("Acclaimed", &[9.9, 9.9, 9.9]),
        ]);

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].director, "Prolific");
    }

    #[test]
    fn ranking_is_descending_by_average() {
        let ranking = rank(vec![
            group_with_scores("Low", &[5.0, 5.0, 5.0, 5.0]),
            group_with_scores("High", &[9.0, 9.0, 9.0, 9.0]),
            group_with_scores("Mid", &[7.0, 7.0, 7.0, 7.0]),
        ]);

        let averages: Vec<f64> = ranking.iter().map(|e| e.average_score).collect();
        assert_eq!(averages, vec![9.0, 7.0, 5.0]);
        assert!(averages.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn equal_averages_keep_group_order() {
        let ranking = rank(vec![
            group_with_scores("First", &[7.5, 7.5, 7.5, 7.5]),
            group_with_scores("Second", &[7.0, 8.0, 7.0, 8.0]),
        ]);

        let directors: Vec<&str> = ranking.iter().map(|e| e.director.as_str()).collect();
        assert_eq!(directors, vec!["First", "Second"]);
    }

    #[test]
    fn empty_group_is_an_error_rather_than_a_nan() {
        let permissive = Config {
            min_movies: 0,
            ..Config::default()
        };
        let empty = DirectorGroup {
            director: "Nobody".to_string(),
            movies: Vec::new(),
        };

        let result = ScoreRanker::rank_directors(vec![empty], &permissive);
        assert!(matches!(result, Err(Error::EmptyGroup(name)) if name == "Nobody"));
    }
}
