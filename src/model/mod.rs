pub mod director_group;
pub mod movie;
pub mod ranked_entry;
