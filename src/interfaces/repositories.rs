pub mod certificate;
pub mod gateway;
pub mod project;
pub mod sqlx_repo;
pub mod visit;
