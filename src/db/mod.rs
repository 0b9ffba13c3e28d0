pub mod connection;
pub mod searches;

pub use connection::{init_db, Database};
