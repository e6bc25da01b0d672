pub mod params;
pub use params::*;

pub mod query_parser;
pub use query_parser::*;
