pub mod database;
pub mod file;
pub mod prelude;
