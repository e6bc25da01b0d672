pub mod error;
pub use error::QueryError;

pub mod convert;
pub use convert::{ConvertError, SqlValue, TypeConverter, ValueConverter};

pub mod query;
pub use query::{Condition, Operator, Query, Sort};

pub mod parser;
pub use parser::{Params, QueryParser};

pub mod sql;
pub use sql::{SqlCompiler, SqlFieldTranslation, SqlPlan, SqlPreloadable, SqlTranslations};
