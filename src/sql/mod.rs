pub mod translation;
pub use translation::*;

pub mod compiler;
pub use compiler::*;

pub mod where_clause;
pub use where_clause::*;

pub mod projection;
pub use projection::*;

pub mod preload;
pub use preload::*;

pub mod plan;
pub use plan::*;

pub mod statement;
pub use statement::*;

pub mod expand;
pub use expand::*;

mod _tests;
