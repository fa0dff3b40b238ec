pub mod estimates;
pub mod projects;
pub mod settings;
