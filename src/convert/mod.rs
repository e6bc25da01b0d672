pub mod sql_value;
pub use sql_value::*;

pub mod convert_error;
pub use convert_error::*;

pub mod type_converter;
pub use type_converter::*;
