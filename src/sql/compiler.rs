use crate::sql::{SanitizedTranslations, SqlTranslations};

/// Compiles [`Query`](crate::query::Query) parts into SQL fragments against
/// one translation table.
///
/// The table is sanitized once on construction; the caller's copy is only
/// borrowed for that.
#[derive(Debug, Clone)]
pub struct SqlCompiler {
    pub(crate) translations: SanitizedTranslations,
}

impl SqlCompiler {
    pub fn new(translations: &SqlTranslations) -> Self {
        Self {
            translations: translations.sanitized(),
        }
    }
}

impl From<&SqlTranslations> for SqlCompiler {
    fn from(value: &SqlTranslations) -> Self {
        SqlCompiler::new(value)
    }
}
