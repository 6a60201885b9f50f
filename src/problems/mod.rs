pub mod annotator;
pub mod catalog;
pub mod problem;
