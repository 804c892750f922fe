pub mod loader;
pub mod rows;

pub use loader::{load_csv, parse_csv, read_csv, Record};
pub use rows::to_numeric;
