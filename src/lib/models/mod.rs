pub mod gas;
pub mod record;
pub mod sweep;
