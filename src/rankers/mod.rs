pub mod score_ranker;
