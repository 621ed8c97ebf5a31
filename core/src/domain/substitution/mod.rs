pub mod entities;
pub mod ports;
pub mod services;
pub mod table;

pub use entities::*;
pub use ports::*;
