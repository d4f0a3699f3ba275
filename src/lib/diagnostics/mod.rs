pub mod external;
pub mod runner;
pub mod schedule;
