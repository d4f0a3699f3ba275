pub mod damage;
pub mod parameters;
