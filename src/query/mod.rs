pub mod operator;
pub use operator::*;

pub mod condition;
pub use condition::*;

pub mod sort;
pub use sort::*;

pub mod query;
pub use query::*;
