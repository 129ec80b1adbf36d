/// One line of the final ranking: a director and their rounded average
/// score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub director: String,
    pub average_score: f64,
}

impl RankedEntry {
    pub fn to_csvable_array(&self) -> Vec<String> {
        vec![
            self.director.clone(),
            format!("{:.1}", self.average_score),
        ]
    }

    pub fn csv_titles() -> Vec<&'static str> {
        vec!["Director", "AverageScore"]
    }
}
