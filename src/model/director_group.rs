use crate::model::movie::Movie;

/// All qualifying movies credited to one director, in input row order.
///
/// The director name is taken from the dataset verbatim. Rows without a
/// director still group together, under the empty name.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorGroup {
    pub director: String,
    pub movies: Vec<Movie>,
}
