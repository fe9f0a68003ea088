pub mod admin;
pub mod certificates;
pub mod home;
pub mod json_error;
pub mod projects;
pub mod system;
pub mod visits;
