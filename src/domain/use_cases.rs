pub mod certificates;
pub mod extractors;
pub mod projects;
pub mod visits;
