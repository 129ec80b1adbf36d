/// One qualifying movie from the metadata dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: u32,
    pub score: f64,
}
