pub mod config;
pub mod helpers;
pub mod io;
pub mod model;
