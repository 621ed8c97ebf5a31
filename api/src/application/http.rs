pub mod grocery;
pub mod health;
pub mod server;
pub mod substitution;
