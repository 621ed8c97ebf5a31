pub mod common;
pub mod grocery;
pub mod substitution;
