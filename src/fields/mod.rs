pub mod model;
pub mod recommender;
